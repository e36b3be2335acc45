use anyhow::Result;
use employee_directory::{
    Dataset, EmbeddedSample, EmployeeDirectory, EmployeeFilter, InMemoryDirectory, LocalJsonFile,
};

const DEMO_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/demo_employees.json");

async fn demo_directory() -> Result<InMemoryDirectory> {
    Ok(InMemoryDirectory::from_source(&LocalJsonFile::new(DEMO_DATA)).await?)
}

fn codes(records: &[employee_directory::Employee]) -> Vec<&str> {
    records.iter().map(|e| e.user_code.as_str()).collect()
}

/// 範例資料：單筆 VIPL2SP24054 記錄
#[tokio::test]
async fn test_embedded_sample_queries() -> Result<()> {
    let directory = InMemoryDirectory::from_source(&EmbeddedSample::new()).await?;

    let found = directory.get_employee_by_code("VIPL2SP24054").await?;
    assert_eq!(found.map(|e| e.city), Some("Chennai".to_string()));
    assert!(directory.get_employee_by_code("NOPE").await?.is_none());

    let facets = directory.get_filter_options().await?;
    assert_eq!(facets.cities, vec!["Chennai"]);

    Ok(())
}

#[tokio::test]
async fn test_get_all_preserves_file_order() -> Result<()> {
    let directory = demo_directory().await?;
    let all = directory.get_all_employees().await?;

    assert_eq!(
        codes(&all),
        vec!["VIPL2SP24054", "VIPL3MR25018", "VIPL3OT24020"]
    );
    Ok(())
}

#[tokio::test]
async fn test_every_code_resolves_and_lookup_is_case_sensitive() -> Result<()> {
    let directory = demo_directory().await?;

    for employee in directory.get_all_employees().await? {
        let found = directory.get_employee_by_code(&employee.user_code).await?;
        assert_eq!(found.as_ref(), Some(&employee));
    }

    assert!(directory.get_employee_by_code("vipl3mr25018").await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_order_preserving() -> Result<()> {
    let directory = demo_directory().await?;

    let lower = directory.search_employees("yuva").await?;
    let upper = directory.search_employees("YUVA").await?;
    assert_eq!(lower, upper);
    assert_eq!(codes(&lower), vec!["VIPL2SP24054"]);

    // surname 命中
    let by_surname = directory.search_employees("sriva").await?;
    assert_eq!(codes(&by_surname), vec!["VIPL3MR25018"]);

    // email 網域對所有人都命中
    let by_email = directory.search_employees("@ZOBBLE").await?;
    assert_eq!(by_email.len(), 3);

    let everyone = directory.search_employees("").await?;
    assert_eq!(everyone, directory.get_all_employees().await?);
    Ok(())
}

#[tokio::test]
async fn test_filter_combines_criteria() -> Result<()> {
    let directory = demo_directory().await?;

    let unfiltered = directory.filter_employees(&EmployeeFilter::default()).await?;
    assert_eq!(unfiltered, directory.get_all_employees().await?);

    let chennai = directory
        .filter_employees(&EmployeeFilter::new().with_city("Chennai"))
        .await?;
    assert_eq!(codes(&chennai), vec!["VIPL2SP24054", "VIPL3OT24020"]);

    let chennai_risk = directory
        .filter_employees(
            &EmployeeFilter::new()
                .with_city("Chennai")
                .with_department("Risk Management")
                .with_employee_status("Joined"),
        )
        .await?;
    assert_eq!(chennai_risk, chennai);

    let none = directory
        .filter_employees(&EmployeeFilter::new().with_city("Chennai").with_department("NA"))
        .await?;
    assert!(none.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_filter_options_exclude_na_only_for_city_and_department() -> Result<()> {
    let dataset = Dataset::from_json_str(
        r#"[
            {"User Code": "1", "City": "NA", "Department": "NA", "FDC Level": "NA", "EmployeeStatus": "NA"},
            {"User Code": "2", "City": "Mumbai", "Department": "Audit", "FDC Level": "Senior", "EmployeeStatus": "Joined"},
            {"User Code": "3", "City": "Mumbai", "Department": "Tax", "FDC Level": "NA", "EmployeeStatus": "Exited"}
        ]"#,
    )?;
    let directory = InMemoryDirectory::new(dataset);

    let facets = directory.get_filter_options().await?;
    assert_eq!(facets.cities, vec!["Mumbai"]);
    assert_eq!(facets.departments, vec!["Audit", "Tax"]);
    assert_eq!(facets.fdc_levels, vec!["NA", "Senior"]);
    assert_eq!(facets.employee_statuses, vec!["NA", "Joined", "Exited"]);
    Ok(())
}

#[tokio::test]
async fn test_demo_records_without_fdc_level_still_load() -> Result<()> {
    let directory = demo_directory().await?;

    let facets = directory.get_filter_options().await?;
    assert_eq!(facets.cities, vec!["Chennai", "Bengaluru"]);
    assert_eq!(facets.departments, vec!["Risk Management"]);
    // 欄位缺漏時為空字串，不視為 "NA"
    assert_eq!(facets.fdc_levels, vec![""]);
    Ok(())
}
