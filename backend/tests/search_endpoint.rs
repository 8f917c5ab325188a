//! End-to-end coverage of `GET /` over the bundled dataset fixture.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;
use user_search::Trace;
use user_search::domain::{ErrorResponse, SearchError, UserRecord, UserSearchService};
use user_search::inbound::http::{HttpState, search_users};
use user_search::outbound::access_tokens::HashedTokenVerifier;
use user_search::outbound::dataset::FileUserDataset;

const TOKEN: &str = "54";

#[fixture]
fn dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("dataset.xml")
}

async fn init_app(
    dataset: &Path,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let search = Arc::new(UserSearchService::new(Arc::new(FileUserDataset::new(
        dataset,
    ))));
    let tokens = Arc::new(HashedTokenVerifier::new(vec![TOKEN.to_owned()]));
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(search, tokens)))
            .wrap(Trace)
            .service(search_users),
    )
    .await
}

fn authorised(uri: &str) -> Request {
    TestRequest::get()
        .uri(uri)
        .insert_header(("AccessToken", TOKEN))
        .to_request()
}

async fn search_ids(dataset: &Path, uri: &str) -> Vec<i64> {
    let app = init_app(dataset).await;
    let response = actix_test::call_service(&app, authorised(uri)).await;
    assert_eq!(response.status(), StatusCode::OK, "uri: {uri}");
    let users: Vec<UserRecord> = actix_test::read_body_json(response).await;
    users.iter().map(UserRecord::id).collect()
}

async fn rejection(dataset: &Path, uri: &str) -> String {
    let app = init_app(dataset).await;
    let response = actix_test::call_service(&app, authorised(uri)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {uri}");
    let envelope: ErrorResponse = actix_test::read_body_json(response).await;
    envelope.error
}

#[rstest]
#[case::first_page_as_is("/?limit=3&offset=0&order_by=0", vec![0, 1, 2])]
#[case::second_page_as_is("/?limit=3&offset=3&order_by=0", vec![3, 4, 5])]
#[case::last_partial_page("/?limit=3&offset=18&order_by=0", vec![18, 19])]
#[case::name_in_both_positions(
    "/?limit=5&offset=0&query=Dillard&order_field=id&order_by=-1",
    vec![17, 3]
)]
#[case::biography_matches(
    "/?limit=10&offset=0&query=officia&order_field=name&order_by=1",
    vec![5, 3, 7, 13]
)]
#[case::ages_ascending_keep_ties_in_order(
    "/?limit=4&offset=0&order_field=age&order_by=1",
    vec![1, 15, 0, 14]
)]
#[case::ages_descending_keep_ties_in_order(
    "/?limit=3&offset=3&order_field=age&order_by=-1",
    vec![12, 17, 16]
)]
#[case::empty_field_sorts_by_name(
    "/?limit=3&offset=0&query=Guerr&order_field=&order_by=-1",
    vec![11, 12]
)]
#[case::match_is_case_sensitive("/?limit=3&offset=0&query=dillard&order_by=0", vec![])]
#[actix_web::test]
async fn answers_searches_over_the_fixture(
    dataset_path: PathBuf,
    #[case] uri: &str,
    #[case] expected: Vec<i64>,
) {
    assert_eq!(search_ids(&dataset_path, uri).await, expected);
}

#[rstest]
#[actix_web::test]
async fn returns_normalised_records(dataset_path: PathBuf) {
    let app = init_app(&dataset_path).await;
    let response = actix_test::call_service(
        &app,
        authorised("/?limit=1&offset=0&query=Terrell&order_by=0"),
    )
    .await;
    assert!(response.headers().contains_key("trace-id"));

    let users: Vec<UserRecord> = actix_test::read_body_json(response).await;
    assert_eq!(
        users,
        vec![UserRecord::new(
            18,
            "Terrell Hall",
            27,
            "Ut nostrud est est elit incididunt consequat sunt ut aliqua sunt sit.",
            "male",
        )]
    );
}

#[rstest]
#[case("/?limit=2&offset=0", SearchError::MalformedParams)]
#[case("/?limit=-2&offset=0&order_by=0", SearchError::BadLimit)]
#[case("/?limit=2&offset=-3&order_by=0", SearchError::BadOffset)]
#[case("/?limit=2&offset=0&order_by=0&order_field=gender", SearchError::BadOrderField)]
#[case("/?limit=2&offset=0&order_by=-2", SearchError::BadOrderBy)]
#[case("/?limit=2&offset=20&order_by=0", SearchError::OffsetOutOfRange)]
#[case("/?limit=2&offset=1&query=Hall&order_by=0", SearchError::OffsetOutOfRange)]
#[actix_web::test]
async fn rejects_unsatisfiable_searches(
    dataset_path: PathBuf,
    #[case] uri: &str,
    #[case] expected: SearchError,
) {
    assert_eq!(rejection(&dataset_path, uri).await, expected.message());
}

#[rstest]
#[actix_web::test]
async fn validation_wins_over_bounds(dataset_path: PathBuf) {
    let message = rejection(&dataset_path, "/?limit=0&offset=500&order_by=0").await;

    assert_eq!(message, SearchError::BadLimit.message());
}

#[rstest]
#[case::missing(None)]
#[case::wrong(Some("55"))]
#[actix_web::test]
async fn tokens_are_checked_first(dataset_path: PathBuf, #[case] token: Option<&str>) {
    let app = init_app(&dataset_path).await;
    let mut request = TestRequest::get().uri("/?limit=0");
    if let Some(token) = token {
        request = request.insert_header(("AccessToken", token));
    }

    let response = actix_test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(actix_test::read_body(response).await.is_empty());
}

#[rstest]
#[case::truncated("<root><row><id>1</id>")]
#[case::bad_number("<root><row><id>one</id></row></root>")]
#[actix_web::test]
async fn broken_datasets_are_server_errors(#[case] contents: &str) {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write dataset");
    let app = init_app(file.path()).await;

    let response =
        actix_test::call_service(&app, authorised("/?limit=1&offset=0&order_by=0")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(actix_test::read_body(response).await.is_empty());
}

#[rstest]
#[actix_web::test]
async fn missing_dataset_is_a_server_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("absent.xml");
    let app = init_app(&missing).await;

    let response =
        actix_test::call_service(&app, authorised("/?limit=1&offset=0&order_by=0")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[rstest]
#[actix_web::test]
async fn pages_cover_the_dataset_exactly_once(dataset_path: PathBuf) {
    let mut seen = Vec::new();
    for offset in (0..20).step_by(6) {
        let uri = format!("/?limit=6&offset={offset}&order_field=age&order_by=1");
        seen.extend(search_ids(&dataset_path, &uri).await);
    }

    let mut sorted = seen.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..20).collect::<Vec<_>>());
}
