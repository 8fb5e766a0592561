//! Lookup-prefix resolution: scheme dispatch, conditional support,
//! decoration, and the concrete resolvers.

use premail::{
    FileResolver, LookupResolver, MemoryResolver, RelativeResolver, ResolutionError,
    ResourceResolver, StringResolver,
};

#[test]
fn supports_requires_a_registered_scheme() {
    let resolver = LookupResolver::builder()
        .register("classpath", MemoryResolver::new().with("/x", b"x".to_vec()))
        .build();

    assert!(resolver.supports("classpath:/x"));
    assert!(!resolver.supports("/x"), "no default resolver registered");
    assert!(!resolver.supports("file:/x"), "scheme never registered");
}

#[test]
fn default_scheme_handles_plain_paths() {
    let resolver = LookupResolver::builder()
        .default_resolver(StringResolver)
        .build();

    assert!(resolver.supports("/email/hello.html"));
    let resource = resolver.resolve("hello").unwrap();
    assert_eq!(resource.content, b"hello");
}

#[test]
fn empty_table_supports_nothing() {
    let resolver = LookupResolver::builder().build();

    assert!(!resolver.supports("/x"));
    let error = resolver.resolve("/x").unwrap_err();
    assert!(matches!(error, ResolutionError::NoResolver { .. }));
}

#[test]
fn bare_delimiter_uses_the_default_scheme() {
    let resolver = LookupResolver::builder()
        .default_resolver(StringResolver)
        .build();

    assert!(resolver.supports(":"));
    let resource = resolver.resolve(":").unwrap();
    assert_eq!(resource.content, b"");
}

#[test]
fn scheme_local_path_keeps_later_delimiters() {
    let resolver = LookupResolver::builder()
        .register("string", StringResolver)
        .build();

    let resource = resolver.resolve("string:a:b").unwrap();
    assert_eq!(resource.content, b"a:b");
}

#[test]
fn last_registration_for_a_scheme_wins() {
    let resolver = LookupResolver::builder()
        .register("mem", MemoryResolver::new().with("a", b"first".to_vec()))
        .register("mem", MemoryResolver::new().with("a", b"second".to_vec()))
        .build();

    let resource = resolver.resolve("mem:a").unwrap();
    assert_eq!(resource.content, b"second");
}

#[test]
fn conditional_delegate_narrows_support() {
    let resolver = LookupResolver::builder()
        .register("mem", MemoryResolver::new().with("known", b"k".to_vec()))
        .build();

    assert!(resolver.supports("mem:known"));
    assert!(
        !resolver.supports("mem:unknown"),
        "registered scheme, but the delegate rejects the path"
    );
    let error = resolver.resolve("mem:unknown").unwrap_err();
    assert!(matches!(error, ResolutionError::NotFound { .. }));
}

#[test]
fn memory_resolver_derives_name_and_media_type() {
    let resolver = MemoryResolver::new().with("images/logo.gif", b"GIF89a".to_vec());

    let resource = resolver.resolve("images/logo.gif").unwrap();
    assert_eq!(resource.name, "logo.gif");
    assert_eq!(resource.media_type, "image/gif");
}

#[test]
fn file_resolver_reads_from_base_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("mail.css"), "p {color:navy}").unwrap();
    let resolver = FileResolver::rooted(dir.path());

    let resource = resolver.resolve("/mail.css").unwrap();
    assert_eq!(resource.content, b"p {color:navy}");
    assert_eq!(resource.media_type, "text/css");
    assert_eq!(resource.name, "mail.css");
}

#[test]
fn file_resolver_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let resolver = FileResolver::rooted(dir.path());

    let error = resolver.resolve("absent.css").unwrap_err();
    assert!(matches!(error, ResolutionError::NotFound { .. }));
}

#[test]
fn string_resolver_content_is_the_path() {
    let resource = StringResolver.resolve("Hello {name}!").unwrap();
    assert_eq!(resource.content, b"Hello {name}!");
    assert_eq!(resource.media_type, "text/plain");
}

#[test]
fn relative_decoration_applies_prefix_and_suffix() {
    let delegate = MemoryResolver::new().with("templates/welcome.html", b"<p>hi</p>".to_vec());
    let resolver = RelativeResolver::new(delegate, "templates/", ".html");

    assert!(resolver.supports("welcome"));
    assert!(!resolver.supports("missing"));
    let resource = resolver.resolve("welcome").unwrap();
    assert_eq!(resource.content, b"<p>hi</p>");
}

#[test]
fn relative_empty_decoration_is_a_noop() {
    let delegate = MemoryResolver::new().with("exact", b"x".to_vec());
    let resolver = RelativeResolver::new(delegate, "", "");

    assert!(resolver.supports("exact"));
    assert_eq!(resolver.resolve("exact").unwrap().content, b"x");
}

#[test]
fn lookup_resolver_exposes_the_selected_delegate() {
    let resolver = LookupResolver::builder()
        .register("string", StringResolver)
        .build();

    assert!(resolver.resolver_for("string:x").is_some());
    assert!(resolver.resolver_for("other:x").is_none());
}
