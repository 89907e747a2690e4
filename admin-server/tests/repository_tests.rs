//! Repository behavior against an embedded RocksDB datastore
//! Run: cargo test -p admin-server --test repository_tests

mod common;

use admin_server::db::models::{
    BranchCreate, DiningTableCreate, DiningTableUpdate, EmployeeCreate, EmployeeUpdate,
    MenuItemCreate, MenuItemUpdate,
};
use admin_server::db::repository::{
    BranchRepository, DiningTableRepository, EmployeeRepository, MenuItemRepository, RepoError,
};
use admin_server::db::DbService;
use admin_server::ErrorCode;
use shared::fixtures::product_rows;

fn menu_item(code: &str, name: &str) -> MenuItemCreate {
    MenuItemCreate {
        code: code.into(),
        name: name.into(),
        price: 12_000,
        ..Default::default()
    }
}

#[tokio::test]
async fn seeded_menu_matches_demo_catalog() {
    let (state, _tmp) = common::test_state(true).await;
    let repo = MenuItemRepository::new(state.db.clone());

    let mut records: Vec<_> = repo
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|item| item.to_record())
        .collect();
    let mut expected = product_rows();
    records.sort_by(|a, b| a.id.cmp(&b.id));
    expected.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(records, expected);
}

#[tokio::test]
async fn seeding_twice_is_a_no_op() {
    let (state, _tmp) = common::test_state(true).await;
    let service = DbService::from_db(state.db.clone()).await.unwrap();

    assert_eq!(service.seed_demo_catalog().await.unwrap(), 0);
    let repo = MenuItemRepository::new(state.db.clone());
    assert_eq!(repo.count().await.unwrap(), 4);
}

#[tokio::test]
async fn menu_item_is_keyed_by_code() {
    let (state, _tmp) = common::test_state(false).await;
    let repo = MenuItemRepository::new(state.db.clone());

    let created = repo.create(menu_item("CF001", "Cà phê sữa đá")).await.unwrap();
    assert_eq!(created.code, "CF001");
    assert_eq!(created.id.unwrap().to_string(), "menu_item:CF001");

    let by_code = repo.find_by_id("CF001").await.unwrap().unwrap();
    let by_id = repo.find_by_id("menu_item:CF001").await.unwrap().unwrap();
    assert_eq!(by_code.name, "Cà phê sữa đá");
    assert_eq!(by_id.name, by_code.name);
}

#[tokio::test]
async fn duplicate_menu_code_is_rejected() {
    let (state, _tmp) = common::test_state(false).await;
    let repo = MenuItemRepository::new(state.db.clone());

    repo.create(menu_item("CF001", "Cà phê đen")).await.unwrap();
    let err = repo.create(menu_item("CF001", "Cà phê sữa")).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::Duplicate { code: ErrorCode::MenuItemCodeExists, .. }
    ));
}

#[tokio::test]
async fn menu_update_merges_and_delete_removes() {
    let (state, _tmp) = common::test_state(false).await;
    let repo = MenuItemRepository::new(state.db.clone());
    repo.create(menu_item("CF001", "Cà phê đen")).await.unwrap();

    let updated = repo
        .update(
            "CF001",
            MenuItemUpdate {
                price: Some(18_000),
                order_note: Some("Ít đường".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 18_000);
    assert_eq!(updated.name, "Cà phê đen");
    assert_eq!(updated.order_note.as_deref(), Some("Ít đường"));

    assert!(repo.delete("CF001").await.unwrap());
    assert!(repo.find_by_id("CF001").await.unwrap().is_none());

    let err = repo.delete("CF001").await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { code: ErrorCode::MenuItemNotFound, .. }
    ));
}

#[tokio::test]
async fn employee_username_is_unique() {
    let (state, _tmp) = common::test_state(false).await;
    let repo = EmployeeRepository::new(state.db.clone());

    let created = repo
        .create(EmployeeCreate {
            username: "lan".into(),
            display_name: "Nguyễn Thị Lan".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.role, "staff");
    assert!(created.is_active);

    let err = repo
        .create(EmployeeCreate {
            username: "lan".into(),
            display_name: "Trần Lan".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Duplicate { code: ErrorCode::EmployeeUsernameExists, .. }
    ));
}

#[tokio::test]
async fn inactive_employees_are_not_listed() {
    let (state, _tmp) = common::test_state(false).await;
    let repo = EmployeeRepository::new(state.db.clone());

    let a = repo
        .create(EmployeeCreate {
            username: "an".into(),
            display_name: "An".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    repo.create(EmployeeCreate {
        username: "binh".into(),
        display_name: "Bình".into(),
        role: Some("cashier".into()),
        ..Default::default()
    })
    .await
    .unwrap();

    let id = a.id.unwrap().to_string();
    repo.update(
        &id,
        EmployeeUpdate {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let listed = repo.find_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].username, "binh");
    assert_eq!(listed[0].role, "cashier");
}

#[tokio::test]
async fn table_names_are_unique_per_branch() {
    let (state, _tmp) = common::test_state(false).await;
    let branches = BranchRepository::new(state.db.clone());
    let tables = DiningTableRepository::new(state.db.clone());

    let q1 = branches
        .create(BranchCreate {
            name: "Quận 1".into(),
            ..Default::default()
        })
        .await
        .unwrap()
        .id
        .unwrap();
    let q3 = branches
        .create(BranchCreate {
            name: "Quận 3".into(),
            ..Default::default()
        })
        .await
        .unwrap()
        .id
        .unwrap();

    let t1 = tables
        .create(DiningTableCreate {
            name: "Bàn 1".into(),
            branch: q1.clone(),
            capacity: None,
        })
        .await
        .unwrap();
    assert_eq!(t1.capacity, 4);
    assert_eq!(t1.branch, q1);

    // same name, other branch
    tables
        .create(DiningTableCreate {
            name: "Bàn 1".into(),
            branch: q3.clone(),
            capacity: Some(6),
        })
        .await
        .unwrap();

    let err = tables
        .create(DiningTableCreate {
            name: "Bàn 1".into(),
            branch: q1.clone(),
            capacity: Some(2),
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Duplicate { code: ErrorCode::TableNameExists, .. }
    ));

    // moving t1 into q3 collides with the table already there
    let err = tables
        .update(
            &t1.id.unwrap().to_string(),
            DiningTableUpdate {
                branch: Some(q3.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Duplicate { code: ErrorCode::TableNameExists, .. }
    ));

    assert_eq!(tables.find_by_branch(&q1.to_string()).await.unwrap().len(), 1);
    assert_eq!(tables.find_by_branch(&q3.to_string()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn table_requires_existing_branch() {
    let (state, _tmp) = common::test_state(false).await;
    let tables = DiningTableRepository::new(state.db.clone());

    let err = tables
        .create(DiningTableCreate {
            name: "Bàn 1".into(),
            branch: "branch:missing".parse().unwrap(),
            capacity: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound { code: ErrorCode::BranchNotFound, .. }
    ));
}

#[tokio::test]
async fn branch_with_tables_cannot_be_deleted() {
    let (state, _tmp) = common::test_state(false).await;
    let branches = BranchRepository::new(state.db.clone());
    let tables = DiningTableRepository::new(state.db.clone());

    let branch = branches
        .create(BranchCreate {
            name: "Thủ Đức".into(),
            address: Some("1 Võ Văn Ngân".into()),
            phone: None,
        })
        .await
        .unwrap();
    let branch_id = branch.id.unwrap();

    let table = tables
        .create(DiningTableCreate {
            name: "VIP".into(),
            branch: branch_id.clone(),
            capacity: Some(10),
        })
        .await
        .unwrap();

    let err = branches.delete(&branch_id.to_string()).await.unwrap_err();
    assert!(matches!(
        err,
        RepoError::Conflict { code: ErrorCode::BranchHasTables, .. }
    ));

    tables.delete(&table.id.unwrap().to_string()).await.unwrap();
    assert!(branches.delete(&branch_id.to_string()).await.unwrap());
    assert!(branches.find_by_id(&branch_id.to_string()).await.unwrap().is_none());
}

#[tokio::test]
async fn branch_rename_checks_duplicates() {
    let (state, _tmp) = common::test_state(false).await;
    let branches = BranchRepository::new(state.db.clone());

    branches
        .create(BranchCreate {
            name: "Hà Nội".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let other = branches
        .create(BranchCreate {
            name: "Đà Nẵng".into(),
            ..Default::default()
        })
        .await
        .unwrap();
    let other_id = other.id.unwrap().to_string();

    let err = branches
        .update(
            &other_id,
            admin_server::db::models::BranchUpdate {
                name: Some("Hà Nội".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Duplicate { code: ErrorCode::BranchNameExists, .. }
    ));

    // keeping its own name is fine
    let same = branches
        .update(
            &other_id,
            admin_server::db::models::BranchUpdate {
                name: Some("Đà Nẵng".into()),
                phone: Some("0236 000 000".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(same.phone.as_deref(), Some("0236 000 000"));
}
