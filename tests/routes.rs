use urlgen::{Declaration, Method, Options, RenderError, RouteError, Routes, Schema};

fn table() -> Routes {
    Routes::new([
        (
            "/methods",
            Declaration::methods([
                (Method::Get, Schema::empty()),
                (Method::Post, Schema::empty()),
                (Method::Put, Schema::empty()),
                (Method::Delete, Schema::empty()),
            ]),
        ),
        (
            "/params/[param]",
            Declaration::shorthand(Schema::new().param("param")),
        ),
        (
            "/queries/optional",
            Declaration::shorthand(Schema::new().query_opt("string").query_opt("number")),
        ),
        (
            "/hash",
            Declaration::shorthand(Schema::new().hash()),
        ),
        (
            "/all/[param]",
            Declaration::shorthand(Schema::new().param("param").query_opt("optional").hash()),
        ),
    ])
    .unwrap()
}

#[test]
fn every_declared_endpoint_exists() {
    let routes = table();
    for template in [
        "/methods",
        "/params/[param]",
        "/queries/optional",
        "/hash",
        "/all/[param]",
    ] {
        assert!(routes.contains(template), "{template}");
    }
    assert!(!routes.contains("/params"));
}

#[test]
fn method_map_declares_exactly_its_methods() {
    let routes = table();

    let methods = routes.endpoint("/methods").unwrap();
    assert!(methods.get().is_some());
    assert!(methods.post().is_some());
    assert!(methods.put().is_some());
    assert!(methods.delete().is_some());

    // shorthand implies GET and nothing else
    let shorthand = routes.endpoint("/params/[param]").unwrap();
    assert!(shorthand.get().is_some());
    assert!(shorthand.post().is_none());
    assert_eq!(shorthand.methods().collect::<Vec<_>>(), [Method::Get]);
}

#[test]
fn empty_schema_builds_with_no_argument() {
    let routes = table();
    let builder = routes.endpoint("/methods").unwrap().post().unwrap();
    assert_eq!(builder.build(), Ok("/methods".to_owned()));
}

#[test]
fn optional_queries_can_be_omitted() {
    let routes = table();
    let builder = routes.endpoint("/queries/optional").unwrap().get().unwrap();

    assert_eq!(builder.build(), Ok("/queries/optional".to_owned()));
    assert_eq!(
        builder.build_with(&Options::new().query("string", "s").query("number", 1i64)),
        Ok("/queries/optional?number=1&string=s".to_owned()),
    );
}

#[test]
fn hash_is_appended_and_encoded() {
    let routes = table();
    let builder = routes.endpoint("/hash").unwrap().get().unwrap();

    assert_eq!(
        builder.build_with(&Options::new().hash("hash")),
        Ok("/hash#hash".to_owned()),
    );
    assert_eq!(
        builder.build_with(&Options::new().hash("hash with space")),
        Ok("/hash#hash%20with%20space".to_owned()),
    );
    // an empty hash is omitted entirely
    assert_eq!(
        builder.build_with(&Options::new().hash("")),
        Ok("/hash".to_owned()),
    );
    assert_eq!(builder.build(), Ok("/hash".to_owned()));
}

#[test]
fn all_parts_compose() {
    let routes = table();
    let options = Options::new()
        .param("param", "1")
        .query("optional", "opt")
        .hash("section");

    assert_eq!(
        routes.url("/all/[param]", Method::Get, &options),
        Ok("/all/1?optional=opt#section".to_owned()),
    );
    assert_eq!(
        routes.url("/all/[param]", Method::Get, &Options::new().param("param", "1")),
        Ok("/all/1".to_owned()),
    );
}

#[test]
fn base_url_is_prefixed() {
    let routes = Routes::with_base_url(
        "https://example.com/api",
        [(
            "/path/[param]",
            Declaration::shorthand(Schema::new().param("param").query("q").hash()),
        )],
    )
    .unwrap();

    let options = Options::new()
        .param("param", "1")
        .query("q", "query")
        .hash("hash");

    assert_eq!(
        routes.url("/path/[param]", Method::Get, &options),
        Ok("https://example.com/api/path/1?q=query#hash".to_owned()),
    );
}

#[test]
fn unknown_lookups_fail() {
    let routes = table();

    assert_eq!(
        routes.url("/nope", Method::Get, &Options::new()),
        Err(RenderError::UnknownRoute {
            template: "/nope".into()
        }),
    );
    assert_eq!(
        routes.url("/hash", Method::Post, &Options::new()),
        Err(RenderError::UnknownMethod {
            template: "/hash".into(),
            method: Method::Post,
        }),
    );
    assert!(routes.endpoint("/nope").is_none());
}

struct DeclarationTest(Vec<(&'static str, Declaration, RouteError)>);

impl DeclarationTest {
    fn run(self) {
        for (template, declaration, expected) in self.0 {
            let got = Routes::new([(template, declaration)]);
            assert_eq!(got.err(), Some(expected), "{template}");
        }
    }
}

#[test]
fn invalid_declarations_are_rejected() {
    DeclarationTest(vec![
        (
            "/x/[]",
            Declaration::shorthand(Schema::empty()),
            RouteError::EmptyParamName {
                template: "/x/[]".into(),
            },
        ),
        (
            "/x/[[...]]",
            Declaration::shorthand(Schema::empty()),
            RouteError::EmptyParamName {
                template: "/x/[[...]]".into(),
            },
        ),
        (
            "/users/[id]",
            Declaration::shorthand(Schema::empty()),
            RouteError::MissingParamDecl {
                template: "/users/[id]".into(),
                name: "id".into(),
            },
        ),
        (
            "/users",
            Declaration::shorthand(Schema::new().param("id")),
            RouteError::UnknownParam {
                template: "/users".into(),
                name: "id".into(),
            },
        ),
        (
            "/files/[...path]",
            Declaration::shorthand(Schema::new().param("path")),
            RouteError::ParamKindMismatch {
                template: "/files/[...path]".into(),
                name: "path".into(),
                declared: "a single value",
                expected: "a list",
            },
        ),
        (
            "/methods",
            Declaration::methods([
                (Method::Get, Schema::empty()),
                (Method::Get, Schema::empty()),
            ]),
            RouteError::DuplicateMethod {
                template: "/methods".into(),
                method: Method::Get,
            },
        ),
    ])
    .run()
}

#[test]
fn duplicate_endpoints_are_rejected() {
    let got = Routes::new([
        ("/users", Declaration::shorthand(Schema::empty())),
        ("/users", Declaration::shorthand(Schema::empty())),
    ]);
    assert_eq!(
        got.err(),
        Some(RouteError::DuplicateEndpoint {
            template: "/users".into()
        }),
    );
}

#[test]
fn schema_is_validated_per_method() {
    let got = Routes::new([(
        "/users/[id]",
        Declaration::methods([
            (Method::Get, Schema::new().param("id")),
            (Method::Post, Schema::empty()),
        ]),
    )]);
    assert_eq!(
        got.err(),
        Some(RouteError::MissingParamDecl {
            template: "/users/[id]".into(),
            name: "id".into(),
        }),
    );
}
