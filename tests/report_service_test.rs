//! End-to-end tests for ReportService

use std::sync::Arc;

use tempfile::TempDir;

use travelcost::application::{ApplicationError, ReportService};
use travelcost::domain::{render, CompanyRecord, DomainError, Travel};
use travelcost::infrastructure::{FetchResult, FileFetcher, RecordFetcher};
use travelcost::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// In-memory transport: deterministic records, no I/O.
struct StubFetcher {
    companies: Vec<CompanyRecord>,
    travels: Vec<Travel>,
}

impl RecordFetcher for StubFetcher {
    fn fetch_companies(&self, _source: &str) -> FetchResult<Vec<CompanyRecord>> {
        Ok(self.companies.clone())
    }

    fn fetch_travels(&self, _source: &str) -> FetchResult<Vec<Travel>> {
        Ok(self.travels.clone())
    }
}

fn company(id: &str, parent_id: &str, name: &str) -> CompanyRecord {
    CompanyRecord {
        id: id.to_string(),
        parent_id: parent_id.to_string(),
        name: name.to_string(),
        created_at: "2021-02-26T00:00:00.000Z".to_string(),
    }
}

fn travel(id: &str, company_id: &str, price: f64) -> Travel {
    Travel {
        id: id.to_string(),
        price,
        departure: "Lima".to_string(),
        destination: "Paris".to_string(),
        company_id: company_id.to_string(),
        created_at: "2021-02-26T00:00:00.000Z".to_string(),
    }
}

#[test]
fn given_stub_records_when_building_report_then_tree_is_fully_valued() {
    // Arrange
    let fetcher = StubFetcher {
        companies: vec![
            company("1", "0", "Root"),
            company("2", "1", "A"),
            company("3", "2", "B"),
        ],
        travels: vec![
            travel("t1", "1", 100.0),
            travel("t2", "2", 50.0),
            travel("t3", "3", 25.0),
        ],
    };
    let service = ReportService::new(Arc::new(fetcher));

    // Act
    let tree = service.build_report("companies", "travels").unwrap();

    // Assert: every node carries a cost, root holds the full total
    for (_, node) in tree.iter() {
        assert!(node.data.cost.is_some());
    }
    let root_node = tree.node(tree.root().unwrap()).unwrap();
    assert_eq!(root_node.data.cost, Some(175.0));
}

#[test]
fn given_dangling_reference_when_building_report_then_domain_error_propagates() {
    // Arrange
    let fetcher = StubFetcher {
        companies: vec![company("1", "0", "Root"), company("2", "missing", "Bad")],
        travels: vec![],
    };
    let service = ReportService::new(Arc::new(fetcher));

    // Act
    let result = service.build_report("companies", "travels");

    // Assert
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::DanglingReference { .. }))
    ));
}

#[test]
fn given_orphan_travels_when_building_report_then_run_succeeds_without_them() {
    // Arrange
    let fetcher = StubFetcher {
        companies: vec![company("1", "0", "Root")],
        travels: vec![travel("t1", "1", 10.0), travel("t2", "ghost", 1000.0)],
    };
    let service = ReportService::new(Arc::new(fetcher));

    // Act
    let tree = service.build_report("companies", "travels").unwrap();

    // Assert: the orphan price is in no node's total
    let root_node = tree.node(tree.root().unwrap()).unwrap();
    assert_eq!(root_node.data.cost, Some(10.0));
}

#[test]
fn given_json_fixtures_when_running_pipeline_then_output_matches_expected_document() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let companies_path = temp.path().join("companies.json");
    let travels_path = temp.path().join("travels.json");
    std::fs::write(
        &companies_path,
        r#"[
            {"id": "1", "createdAt": "2021-02-26T00:55:36.632Z", "name": "Webprovise Corp", "parentId": "0"},
            {"id": "2", "createdAt": "2021-02-25T10:35:32.978Z", "name": "Stamm LLC", "parentId": "1"}
        ]"#,
    )
    .unwrap();
    std::fs::write(
        &travels_path,
        r#"[
            {"id": "t1", "createdAt": "2020-08-27T00:22:26.927Z", "price": 400.0, "companyId": "2", "departure": "Lima", "destination": "Paris"},
            {"id": "t2", "createdAt": "2021-02-03T08:11:58.569Z", "price": 100.0, "companyId": "1", "departure": "Oslo", "destination": "Quito"}
        ]"#,
    )
    .unwrap();
    let service = ReportService::new(Arc::new(FileFetcher));

    // Act
    let tree = service
        .build_report(
            companies_path.to_str().unwrap(),
            travels_path.to_str().unwrap(),
        )
        .unwrap();
    let json = render::to_json(&tree).unwrap();

    // Assert
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(doc["name"], "Webprovise Corp");
    assert_eq!(doc["cost"], 500.0);
    assert_eq!(doc["children"][0]["name"], "Stamm LLC");
    assert_eq!(doc["children"][0]["cost"], 400.0);
}
