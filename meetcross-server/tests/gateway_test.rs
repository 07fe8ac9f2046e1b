//! Entity gateway integration tests
//!
//! Runs every repository against an in-memory SQLite database with the
//! real migrations applied.

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use meetcross_server::db::repository::{
    RepoError, announcement, donation, event, family, member, settings,
};
use shared::models::{
    Announcement, AnnouncementTarget, ChurchSettings, Donation, Event, EventType, Family, FundType,
    Gender, Member, MemberStatus, PaymentMethod,
};

/// In-memory database with migrations applied.
///
/// A single connection keeps the `:memory:` database alive for the whole
/// test; a second connection would see an empty schema.
async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");
    pool
}

fn new_member(first: &str, last: &str) -> Member {
    Member {
        id: String::new(),
        first_name: first.into(),
        last_name: last.into(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: String::new(),
        gender: Gender::Female,
        status: MemberStatus::Active,
        birth_date: "1990-01-01".into(),
        address: String::new(),
        family_id: None,
        photo_url: None,
        baptism_date: None,
        notes: None,
    }
}

fn new_event(title: &str, date: &str) -> Event {
    Event {
        id: String::new(),
        title: title.into(),
        description: String::new(),
        date: date.into(),
        location: "Main Hall".into(),
        event_type: EventType::Service,
        attendee_ids: Vec::new(),
        attendance_count: 0,
    }
}

#[tokio::test]
async fn test_member_save_assigns_id_and_lists_once() {
    let pool = test_pool().await;

    let saved = member::save(&pool, new_member("Ada", "Lovelace"))
        .await
        .expect("insert member");
    assert!(!saved.id.is_empty());

    let all = member::find_all(&pool).await.expect("list members");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, saved.id);
    assert_eq!(all[0].first_name, "Ada");
}

#[tokio::test]
async fn test_member_update_keeps_count_and_reflects_values() {
    let pool = test_pool().await;

    let mut saved = member::save(&pool, new_member("Grace", "Hopper"))
        .await
        .expect("insert member");
    saved.status = MemberStatus::Inactive;
    saved.phone = "555-0101".into();

    let updated = member::save(&pool, saved.clone()).await.expect("update member");
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.status, MemberStatus::Inactive);
    assert_eq!(updated.phone, "555-0101");

    let all = member::find_all(&pool).await.expect("list members");
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_member_list_sorted_by_surname() {
    let pool = test_pool().await;

    member::save(&pool, new_member("Ada", "Zuse")).await.expect("insert");
    member::save(&pool, new_member("Grace", "Babbage")).await.expect("insert");

    let all = member::find_all(&pool).await.expect("list members");
    assert_eq!(all[0].last_name, "Babbage");
    assert_eq!(all[1].last_name, "Zuse");
}

#[tokio::test]
async fn test_member_delete_removes_and_missing_is_error() {
    let pool = test_pool().await;

    let saved = member::save(&pool, new_member("Ada", "Lovelace"))
        .await
        .expect("insert member");

    member::delete(&pool, &saved.id).await.expect("delete member");
    assert!(member::find_all(&pool).await.expect("list").is_empty());

    let err = member::delete(&pool, &saved.id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let err = member::save(
        &pool,
        Member {
            id: "no-such-id".into(),
            ..new_member("Ghost", "Row")
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn test_family_delete_nulls_member_references() {
    let pool = test_pool().await;

    let fam = family::save(
        &pool,
        Family {
            id: String::new(),
            family_name: "Lovelace".into(),
            address: "1 King St".into(),
            head_of_family_id: None,
        },
    )
    .await
    .expect("insert family");

    let mut m1 = new_member("Ada", "Lovelace");
    m1.family_id = Some(fam.id.clone());
    let m1 = member::save(&pool, m1).await.expect("insert m1");

    let mut m2 = new_member("Annabella", "Lovelace");
    m2.family_id = Some(fam.id.clone());
    let m2 = member::save(&pool, m2).await.expect("insert m2");

    let other = member::save(&pool, new_member("Grace", "Hopper"))
        .await
        .expect("insert other");

    family::delete(&pool, &fam.id).await.expect("delete family");

    assert!(family::find_all(&pool).await.expect("list").is_empty());
    for id in [&m1.id, &m2.id] {
        let m = member::find_by_id(&pool, id)
            .await
            .expect("find member")
            .expect("member survives cascade");
        assert!(m.family_id.is_none());
    }
    let other = member::find_by_id(&pool, &other.id)
        .await
        .expect("find other")
        .expect("other untouched");
    assert_eq!(other.first_name, "Grace");

    let err = family::delete(&pool, &fam.id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn test_attendance_wholesale_replace() {
    let pool = test_pool().await;

    let m1 = member::save(&pool, new_member("Ada", "Lovelace"))
        .await
        .expect("m1");
    let m2 = member::save(&pool, new_member("Grace", "Hopper"))
        .await
        .expect("m2");

    let ev = event::save(&pool, new_event("Sunday Service", "2026-03-01"))
        .await
        .expect("insert event");
    assert_eq!(ev.attendance_count, 0);

    let ev = event::set_attendees(&pool, &ev.id, &[m1.id.clone(), m2.id.clone()])
        .await
        .expect("set attendees");
    assert_eq!(ev.attendance_count, 2);

    // Replace, not append
    let ev = event::set_attendees(&pool, &ev.id, std::slice::from_ref(&m2.id))
        .await
        .expect("replace attendees");
    assert_eq!(ev.attendance_count, 1);
    assert_eq!(ev.attendee_ids, vec![m2.id.clone()]);

    // Unknown member rejected, list untouched
    let err = event::set_attendees(&pool, &ev.id, &[m1.id.clone(), "bogus".into()])
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    let ev = event::find_by_id(&pool, &ev.id)
        .await
        .expect("reload")
        .expect("event exists");
    assert_eq!(ev.attendee_ids, vec![m2.id]);
}

#[tokio::test]
async fn test_event_save_ignores_attendee_payload() {
    let pool = test_pool().await;

    let mut payload = new_event("Choir Practice", "2026-03-02");
    payload.attendee_ids = vec!["injected".into()];
    payload.attendance_count = 99;

    let saved = event::save(&pool, payload).await.expect("insert event");
    assert!(saved.attendee_ids.is_empty());
    assert_eq!(saved.attendance_count, 0);
}

#[tokio::test]
async fn test_donation_insert_strips_caller_id() {
    let pool = test_pool().await;

    let saved = donation::add(
        &pool,
        Donation {
            id: "caller-picked".into(),
            member_id: None,
            amount: 250.0,
            date: "2026-02-14".into(),
            fund: FundType::Building,
            method: PaymentMethod::Transfer,
            notes: Some("anonymous gift".into()),
        },
    )
    .await
    .expect("record donation");

    assert_ne!(saved.id, "caller-picked");
    assert!(saved.member_id.is_none());
    assert_eq!(saved.fund, FundType::Building);

    let all = donation::find_all(&pool).await.expect("list donations");
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_settings_default_then_upsert() {
    let pool = test_pool().await;

    // No row yet: built-in default, not an error
    let current = settings::get(&pool).await.expect("default settings");
    assert_eq!(current.currency, "$");
    assert!(current.name.is_empty());

    let saved = settings::save(
        &pool,
        ChurchSettings {
            name: "Grace Chapel".into(),
            currency: "€".into(),
            ..ChurchSettings::default()
        },
    )
    .await
    .expect("save settings");
    assert_eq!(saved.name, "Grace Chapel");

    // Second save updates the same singleton row
    let saved = settings::save(
        &pool,
        ChurchSettings {
            name: "Grace Chapel".into(),
            currency: "£".into(),
            ..ChurchSettings::default()
        },
    )
    .await
    .expect("update settings");
    assert_eq!(saved.currency, "£");
}

#[tokio::test]
async fn test_announcement_defaults_date_and_deletes() {
    let pool = test_pool().await;

    let saved = announcement::save(
        &pool,
        Announcement {
            id: String::new(),
            title: "Potluck".into(),
            message: "Bring a dish".into(),
            date: String::new(),
            target: AnnouncementTarget::All,
            target_member_id: None,
            author: "admin".into(),
            sent_via_email: false,
        },
    )
    .await
    .expect("insert announcement");
    assert!(!saved.date.is_empty());

    announcement::delete(&pool, &saved.id)
        .await
        .expect("delete announcement");
    let err = announcement::delete(&pool, &saved.id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}
