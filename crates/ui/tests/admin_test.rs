use std::sync::Arc;

use chrono::Utc;
use citaflow_core::errors::BookingError;
use citaflow_core::models::business::{BusinessUser, Plan, Role, UsageCounts};
use citaflow_core::models::pagination::{PageMeta, Paginated};
use citaflow_ui::admin::{AdminPanel, MockAdminApi};
use citaflow_ui::cache::QueryCache;
use pretty_assertions::assert_eq;

fn business(id: &str, plan: Plan) -> BusinessUser {
    BusinessUser {
        id: id.to_string(),
        email: format!("{id}@example.com"),
        business_name: "Salon Ana".to_string(),
        role: Role::Owner,
        plan,
        max_employees: 5,
        max_services: 15,
        plan_expires_at: None,
        created_at: Utc::now(),
        counts: UsageCounts {
            employees: 2,
            services: 4,
            clients: 80,
            appointments: 300,
        },
    }
}

fn page_of(businesses: Vec<BusinessUser>) -> Paginated<BusinessUser> {
    let total = businesses.len() as u64;
    Paginated {
        data: businesses,
        meta: PageMeta {
            total_items: total,
            current_page: 1,
            total_pages: 1,
            items_per_page: 10,
        },
    }
}

#[tokio::test]
async fn test_panel_lists_businesses() {
    let mut api = MockAdminApi::new();
    api.expect_businesses()
        .times(1)
        .returning(|_| Ok(page_of(vec![business("biz_1", Plan::Free)])));

    let mut panel = AdminPanel::new(Arc::new(QueryCache::new()), Arc::new(api));
    panel.list_mut().refresh().await.expect("list load");

    let data = panel.list().data().expect("businesses loaded");
    assert_eq!(data.data[0].id, "biz_1");
    assert_eq!(data.data[0].counts.appointments, 300);
}

#[tokio::test]
async fn test_change_plan_refetches_table() {
    let mut api = MockAdminApi::new();
    api.expect_set_plan()
        .withf(|user_id, plan| user_id == "biz_1" && *plan == Plan::Empresa)
        .times(1)
        .returning(|_, _| Ok(business("biz_1", Plan::Empresa)));
    api.expect_businesses()
        .times(1)
        .returning(|_| Ok(page_of(vec![business("biz_1", Plan::Empresa)])));

    let mut panel = AdminPanel::new(Arc::new(QueryCache::new()), Arc::new(api));
    panel.change_plan("biz_1", Plan::Empresa).await.expect("plan change");

    assert!(panel.plan_change().is_success());
    let data = panel.list().data().expect("refetched table");
    assert_eq!(data.data[0].plan, Plan::Empresa);
}

#[tokio::test]
async fn test_failed_plan_change_leaves_table_alone() {
    let mut api = MockAdminApi::new();
    api.expect_set_plan().times(1).returning(|_, _| {
        Err(BookingError::Api {
            status: 403,
            message: "Super admin only".to_string(),
        })
    });

    let mut panel = AdminPanel::new(Arc::new(QueryCache::new()), Arc::new(api));
    assert!(panel.change_plan("biz_1", Plan::Free).await.is_err());
    assert_eq!(panel.plan_change().error_message(), Some("Super admin only"));
}
