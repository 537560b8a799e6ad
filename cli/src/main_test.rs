use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("spaces-cli").chain(args.iter().copied())).expect("parse")
}

#[test]
fn list_flags_map_onto_query() {
    let cli = parse(&["list", "--page", "2", "--space-type", "garage", "--available", "true", "--min-price", "5"]);
    let Command::List(args) = cli.command else {
        panic!("expected list command");
    };
    let query: SpaceQuery = args.into();
    assert_eq!(query.page, Some(2));
    assert_eq!(query.space_type.as_deref(), Some("garage"));
    assert_eq!(query.is_available, Some(true));
    assert_eq!(query.min_price, Some(5.0));
    assert_eq!(query.city, None);
}

#[test]
fn empty_list_args_give_default_query() {
    let query: SpaceQuery = ListArgs::default().into();
    assert_eq!(query, SpaceQuery::default());
}

#[test]
fn update_takes_id_and_data() {
    let cli = parse(&["update", "7", "--data", "{\"title\":\"Bigger Garage\"}"]);
    let Command::Update { id, data } = cli.command else {
        panic!("expected update command");
    };
    assert_eq!(id, 7);
    let payload: SpaceUpdate = parse_payload(&data).expect("payload");
    assert_eq!(payload.title.as_deref(), Some("Bigger Garage"));
    assert_eq!(payload.price_per_hour, None);
}

#[test]
fn create_requires_data() {
    assert!(Cli::try_parse_from(["spaces-cli", "create"]).is_err());
}

#[test]
fn get_rejects_non_numeric_id() {
    assert!(Cli::try_parse_from(["spaces-cli", "get", "abc"]).is_err());
}

#[test]
fn malformed_payload_is_invalid_json() {
    let err = parse_payload::<SpaceUpdate>("{not json").unwrap_err();
    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[test]
fn read_data_passes_inline_values_through() {
    assert_eq!(read_data("{\"a\":1}").expect("inline"), "{\"a\":1}");
}

#[test]
fn rejected_parses_detail_body() {
    let err = CliError::rejected(404, r#"{"detail":"Space not found"}"#);
    assert_eq!(err.to_string(), "server returned HTTP 404: Space not found");
}

#[test]
fn rejected_tolerates_non_json_body() {
    let err = CliError::rejected(502, "<html>bad gateway</html>");
    assert!(matches!(err, CliError::Rejected { status: 502, body: None }));
    assert_eq!(err.to_string(), "server returned HTTP 502");
}
