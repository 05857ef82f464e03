use codestat_domain::LanguageDescriptor;

const C_FAMILY: &[&str] = &[
    "for ", "for(", "if ", "if(", "switch ", "while ", "else ", "|| ", "&& ", "!= ", "== ",
];

fn lang(name: &str, extensions: &[&str], keywords: &[&str]) -> LanguageDescriptor {
    LanguageDescriptor::new(name)
        .with_extensions(extensions)
        .with_keywords(keywords.iter().copied())
}

/// Bundled language table.
pub(super) fn descriptors() -> Vec<LanguageDescriptor> {
    vec![
        lang("C", &["c", "h"], C_FAMILY),
        lang("C++", &["cpp", "cc", "cxx", "hpp", "hh", "hxx"], C_FAMILY),
        lang("C#", &["cs"], &[
            "for ", "for(", "foreach ", "if ", "if(", "switch ", "while ", "else ", "|| ", "&& ",
            "!= ", "== ", "catch ",
        ]),
        lang("Java", &["java"], &[
            "for ", "for(", "if ", "if(", "switch ", "while ", "else ", "|| ", "&& ", "!= ", "== ",
            "catch ",
        ]),
        lang("JavaScript", &["js", "mjs", "cjs", "jsx"], &[
            "for ", "for(", "if ", "if(", "switch ", "while ", "else ", "|| ", "&& ", "!= ", "== ",
            "=== ", "!== ", "catch ",
        ]),
        lang("TypeScript", &["ts", "tsx", "mts", "cts"], &[
            "for ", "for(", "if ", "if(", "switch ", "while ", "else ", "|| ", "&& ", "!= ", "== ",
            "=== ", "!== ", "catch ",
        ]),
        lang("Go", &["go"], &[
            "for ", "if ", "switch ", "select ", "case ", "else ", "|| ", "&& ", "!= ", "== ",
        ]),
        lang("Rust", &["rs"], &[
            "for ", "if ", "match ", "while ", "loop ", "else ", "|| ", "&& ", "!= ", "== ",
        ]),
        lang("Python", &["py", "pyw", "pyi"], &[
            "for ", "if ", "elif ", "while ", "else:", "except ", "with ", " and ", " or ",
        ]),
        lang("Ruby", &["rb", "rake"], &[
            "for ", "if ", "elsif ", "unless ", "while ", "until ", "case ", "rescue ", "|| ", "&& ",
        ]),
        lang("Shell", &["sh", "bash", "zsh"], &[
            "for ", "if ", "elif ", "while ", "until ", "case ", "|| ", "&& ",
        ]),
        lang("Makefile", &["mk", "makefile"], &["ifeq ", "ifneq ", "ifdef ", "ifndef "]),
        lang("JSON", &["json"], &[]),
        lang("TOML", &["toml"], &[]),
        lang("YAML", &["yml", "yaml"], &[]),
        lang("Markdown", &["md", "markdown"], &[]),
        lang("Plain Text", &["txt", "text"], &[]),
    ]
}
