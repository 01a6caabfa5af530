use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use strsim::damerau_levenshtein;
use unicode_normalization::UnicodeNormalization;

/// Skill alias -> canonical form mapping (O(1) lookup).
///
/// Covers the technology names that show up in job requirements, resume
/// skill sections and repository language lists. Matching is always done on
/// canonical forms so that "JS", "js" and "JavaScript" compare equal.
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // JavaScript ecosystem
        (
            "javascript",
            &["js", "javascript", "java script", "ecmascript", "es6", "es2015"],
        ),
        ("typescript", &["ts", "typescript", "type script"]),
        ("nodejs", &["node.js", "node js", "nodejs", "node"]),
        // Frontend frameworks
        ("react", &["reactjs", "react.js", "react js", "react"]),
        ("vue", &["vue.js", "vuejs", "vue js", "vue", "vue3"]),
        ("angular", &["angularjs", "angular.js", "angular", "angular2"]),
        ("svelte", &["sveltejs", "svelte.js", "svelte"]),
        ("nextjs", &["next.js", "nextjs", "next js"]),
        // Styling
        ("css", &["css", "css3", "cascading style sheets"]),
        ("html", &["html", "html5"]),
        ("sass", &["scss", "sass"]),
        ("tailwind", &["tailwindcss", "tailwind css", "tailwind"]),
        ("bootstrap", &["bootstrap", "bootstrap4", "bootstrap5"]),
        // Backend frameworks
        ("spring", &["spring boot", "springboot", "spring framework", "spring"]),
        ("django", &["django rest framework", "drf", "django"]),
        ("flask", &["flask framework", "python flask", "flask"]),
        ("express", &["express.js", "expressjs", "express js", "express"]),
        ("fastapi", &["fast api", "fastapi framework", "fastapi"]),
        ("rails", &["ruby on rails", "ror", "rails"]),
        // Databases
        ("postgresql", &["postgres", "pg", "postgresql", "postgre sql"]),
        ("mysql", &["my sql", "mysql", "mariadb"]),
        ("mongodb", &["mongo", "mongo db", "mongodb"]),
        ("redis", &["redis cache", "redis db", "redis"]),
        ("elasticsearch", &["elastic search", "elasticsearch"]),
        ("sqlite", &["sqlite3", "sql lite", "sqlite"]),
        ("sql", &["sql", "structured query language"]),
        // Cloud platforms
        ("aws", &["amazon web services", "amazon aws", "aws cloud", "aws"]),
        ("gcp", &["google cloud platform", "google cloud", "gcp"]),
        ("azure", &["microsoft azure", "ms azure", "azure cloud", "azure"]),
        // Programming languages
        ("python", &["python3", "python 3", "py", "python"]),
        ("java", &["java8", "java11", "java17", "openjdk", "java"]),
        ("csharp", &["c#", "c sharp", "csharp", ".net", "dotnet"]),
        ("cplusplus", &["c++", "cpp", "c plus plus"]),
        ("golang", &["go", "golang", "go lang"]),
        ("rust", &["rust lang", "rust language", "rust"]),
        ("php", &["php7", "php8", "php"]),
        ("ruby", &["ruby lang", "ruby language", "ruby"]),
        ("swift", &["swift lang", "ios swift", "swift"]),
        ("kotlin", &["kotlin lang", "kotlin jvm", "kotlin"]),
        // DevOps and tools
        ("docker", &["docker container", "containerization", "docker"]),
        ("kubernetes", &["k8s", "kube", "kubernetes"]),
        ("git", &["version control", "git scm", "github", "gitlab", "git"]),
        ("terraform", &["infrastructure as code", "iac", "terraform"]),
        ("graphql", &["graph ql", "graphql"]),
        ("rest", &["rest api", "rest apis", "restful", "restful apis", "rest"]),
        // AI/ML
        ("ml", &["machine learning", "ml"]),
        ("tensorflow", &["tensor flow", "tf", "tensorflow"]),
        ("pytorch", &["torch", "py torch", "pytorch"]),
        // Testing frameworks
        ("jest", &["jest testing", "jest framework", "jest"]),
        ("cypress", &["cypress testing", "cypress"]),
        ("pytest", &["python testing", "py test", "pytest"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Keys with separators removed after NFKC normalization, to tolerate minor
/// spelling variation ("React.js" vs "reactjs" vs "react js").
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        let compact = compact_key(alias);
        map.entry(compact).or_insert(*canonical);
    }
    map
});

fn nfkc_lower_trim(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

fn compact_key(input: &str) -> String {
    input
        .nfkc()
        .collect::<String>()
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ','))
        .collect()
}

fn split_segments(input: &str) -> impl Iterator<Item = String> + '_ {
    input
        .split(|c: char| matches!(c, ' ' | '/' | ',' | ';' | '|' | '+'))
        .map(nfkc_lower_trim)
        .filter(|s| !s.is_empty())
}

fn match_canonical_token(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some(canonical.to_string());
    }

    let compact = compact_key(token);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        return Some((*canonical).to_string());
    }

    fuzzy_match_canonical(&compact)
}

fn fuzzy_match_canonical(compact: &str) -> Option<String> {
    if compact.len() < 4 {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        // Never fuzzy-match short tokens (java, rust, go); those are only
        // reachable via the exact/alias lookups above.
        if alias.len() < 5 || compact.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some((*canonical).to_string());
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        match best {
            None => best = Some((*canonical, distance)),
            Some((_, best_dist)) if distance < best_dist => best = Some((*canonical, distance)),
            _ => {}
        }
    }

    best.map(|(canonical, _)| canonical.to_string())
}

/// Normalize a skill string to its canonical form. Unknown skills fall back
/// to their lowercased trimmed spelling, so unlisted technologies still match
/// each other case-insensitively.
pub fn normalize_skill(skill: &str) -> String {
    let normalized = nfkc_lower_trim(skill);
    if let Some(canonical) = match_canonical_token(&normalized) {
        return canonical;
    }

    for segment in split_segments(skill) {
        if let Some(canonical) = match_canonical_token(&segment) {
            return canonical;
        }
    }

    normalized
}

/// Normalize a list of skills into a canonical set.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_skill(s))
        .collect()
}
