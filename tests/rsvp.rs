use boda::routes::rsvp::models::{GuestEntry, RsvpForm};
use boda::routes::songs::models::SubmitSong;
use boda::utils::rsvp::errors::RsvpError;
use boda::utils::rsvp::{check_existing_rsvp, delete_rsvp, submit_rsvp};
use boda::utils::songs::submit_song_suggestion;
use sqlx::PgPool;
use tracing::trace;
use tracing_test::traced_test;

fn garcia_form() -> RsvpForm {
    RsvpForm {
        invitation_code: "garcia".to_string(),
        guests: vec![
            GuestEntry::attending("Juan García"),
            GuestEntry::attending("Sofía García"),
            GuestEntry::attending("Mateo García"),
        ],
    }
}

async fn confirmation_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM rsvp_confirmations")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[traced_test]
#[sqlx::test]
async fn submit_then_check_returns_the_same_guests(pool: PgPool) {
    let mut form = garcia_form();
    form.guests[2].attending = false;

    let stored = submit_rsvp(&pool, form.clone()).await.unwrap();
    trace!("{:?}", stored);
    assert_eq!(stored.invitation_code, "garcia");
    assert_eq!(stored.guests.0, form.guests);

    let found = check_existing_rsvp(&pool, "garcia").await.unwrap().unwrap();
    let attending = found.guests.0.iter().filter(|g| g.attending).count();
    assert_eq!(found.guests.0, form.guests);
    assert_eq!(attending, 2);
}

#[traced_test]
#[sqlx::test]
async fn duplicate_submission_reports_already_confirmed(pool: PgPool) {
    submit_rsvp(&pool, garcia_form()).await.unwrap();

    let mut second = garcia_form();
    second.guests.truncate(1);
    let res = submit_rsvp(&pool, second).await;

    assert!(matches!(res, Err(RsvpError::AlreadyConfirmed)));
    assert_eq!(confirmation_count(&pool).await, 1);
}

#[sqlx::test]
async fn invitation_code_is_normalized_before_storage(pool: PgPool) {
    let mut form = garcia_form();
    form.invitation_code = "  GARCIA ".to_string();
    submit_rsvp(&pool, form).await.unwrap();

    let found = check_existing_rsvp(&pool, "Garcia").await.unwrap();
    assert_eq!(found.unwrap().invitation_code, "garcia");
}

#[sqlx::test]
async fn checking_an_unconfirmed_code_is_not_an_error(pool: PgPool) {
    let found = check_existing_rsvp(&pool, "garcia").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn invalid_form_never_reaches_the_database(pool: PgPool) {
    let mut form = garcia_form();
    form.guests[0].name = "J".to_string();

    let res = submit_rsvp(&pool, form).await;
    assert!(matches!(res, Err(RsvpError::InvalidForm(_))));
    assert_eq!(confirmation_count(&pool).await, 0);

    let mut form = garcia_form();
    form.guests.clear();
    let res = submit_rsvp(&pool, form).await;
    assert!(matches!(res, Err(RsvpError::InvalidForm(_))));
    assert_eq!(confirmation_count(&pool).await, 0);
}

#[traced_test]
#[sqlx::test(fixtures("confirmations"))]
async fn delete_then_check_returns_not_confirmed(pool: PgPool) {
    let found = check_existing_rsvp(&pool, "lopez").await.unwrap();
    assert!(found.is_some());

    delete_rsvp(&pool, "lopez").await.unwrap();

    let found = check_existing_rsvp(&pool, "lopez").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn deleting_a_missing_confirmation_is_not_found(pool: PgPool) {
    let res = delete_rsvp(&pool, "garcia").await;
    assert!(matches!(res, Err(RsvpError::NotFound)));
}

#[sqlx::test]
async fn song_suggestions_have_no_uniqueness(pool: PgPool) {
    let suggestion = SubmitSong {
        song_name: "El poder de tu amor".to_string(),
        suggested_by: None,
    };
    submit_song_suggestion(&pool, suggestion.clone()).await.unwrap();
    submit_song_suggestion(&pool, suggestion).await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM song_suggestions")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 2);
}
