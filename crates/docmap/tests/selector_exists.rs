use docmap::schema::Catalog;
use docmap::selector::{FieldExistence, Select};
use docmap::{Document, Entity, Filter, Map, Value};
use pretty_assertions::assert_eq;

#[derive(Debug, Default, Document)]
#[document(collection = "users")]
struct User {
    pseudo: Option<String>,
}

#[derive(Debug, Default, Document)]
#[document(collection = "users")]
struct Admin {
    #[document(parent)]
    user: User,
    roles: Vec<String>,
    code: Option<String>,
}

#[derive(Debug, Default, Document)]
#[document(collection = "users")]
struct Web {
    #[document(parent)]
    user: User,
    avatar: Option<String>,
}

#[derive(Debug, Default, Document)]
#[document(collection = "users")]
struct Verified {
    #[document(parent)]
    web: Web,
    badge: Option<String>,
}

fn selector() -> FieldExistence {
    FieldExistence::new(User::describe())
        .with(Admin::describe(), ["roles", "code"])
        .with(Web::describe(), ["pseudo", "avatar"])
}

fn raw(entries: impl IntoIterator<Item = (&'static str, Value)>) -> Map {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

#[test]
fn all_fields_must_be_present() {
    let selector = selector();

    assert!(selector
        .instantiate(&raw([("pseudo", Value::from("x"))]))
        .is::<User>());
    assert!(selector
        .instantiate(&raw([("pseudo", Value::from("x")), ("avatar", Value::Null)]))
        .is::<Web>());
    assert!(selector
        .instantiate(&raw([
            ("roles", Value::list(["root"])),
            ("code", Value::from("A1")),
            ("pseudo", Value::from("x")),
            ("avatar", Value::Null),
        ]))
        .is::<Admin>());
}

#[test]
fn filters_require_every_field() {
    assert_eq!(
        selector().filters(Admin::describe()),
        Filter::exists("roles").and(Filter::exists("code"))
    );
    assert_eq!(selector().filters(User::describe()), Filter::all());
    assert_eq!(
        selector().filters(Web::describe()).to_document(),
        raw([
            ("pseudo", Value::document([("$exists", true)])),
            ("avatar", Value::document([("$exists", true)])),
        ])
    );
}

#[test]
fn declaration_order_decides_overlapping_sets() {
    let doc = raw([
        ("pseudo", Value::from("x")),
        ("avatar", Value::Null),
        ("badge", Value::from("gold")),
    ]);

    let specific_first = FieldExistence::new(User::describe())
        .with(Verified::describe(), ["pseudo", "avatar", "badge"])
        .with(Web::describe(), ["pseudo", "avatar"]);
    assert!(specific_first.instantiate(&doc).is::<Verified>());

    let general_first = FieldExistence::new(User::describe())
        .with(Web::describe(), ["pseudo", "avatar"])
        .with(Verified::describe(), ["pseudo", "avatar", "badge"]);
    assert!(general_first.instantiate(&doc).is::<Web>());
}

#[test]
fn filters_select_only_documents_of_the_class() {
    let selector = FieldExistence::new(User::describe())
        .with(Admin::describe(), ["roles", "code"])
        .with(Verified::describe(), ["pseudo", "avatar", "badge"])
        .with(Web::describe(), ["pseudo", "avatar"]);

    let stored = [
        raw([("pseudo", Value::from("a"))]),
        raw([("pseudo", Value::from("b")), ("avatar", Value::Null)]),
        raw([
            ("pseudo", Value::from("c")),
            ("avatar", Value::from("c.png")),
            ("badge", Value::from("gold")),
        ]),
        raw([("roles", Value::list(["root"])), ("code", Value::Null)]),
    ];

    for class in [Admin::describe(), Verified::describe()] {
        let filter = selector.filters(class);
        let matched: Vec<_> = stored.iter().filter(|doc| filter.matches(doc)).collect();

        assert_eq!(matched.len(), 1);
        assert_eq!(selector.instantiate(matched[0]).class(), class);
    }
}

#[test]
fn catalog_names_resolve() {
    let mut catalog = Catalog::new();
    catalog
        .register_document::<User>()
        .register_document::<Web>();

    let fields: &[&str] = &["pseudo", "avatar"];
    let selector = FieldExistence::from_catalog(&catalog, "User", [("Web", fields)]).unwrap();
    assert_eq!(selector.fields(Web::describe()).unwrap(), ["pseudo", "avatar"]);

    let err = FieldExistence::from_catalog(&catalog, "User", [("Admin", fields)]).unwrap_err();
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "configuration error: class `Admin` cannot be resolved"
    );
}
