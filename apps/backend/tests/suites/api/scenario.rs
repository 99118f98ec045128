use wordroom_backend::api;
use wordroom_backend::entities::RoundState;
use wordroom_backend::error::AppError;
use wordroom_backend::errors::ErrorCode;

use crate::support::{create_principal, test_state};

#[tokio::test]
async fn start_pause_resume_keeps_one_round() -> Result<(), AppError> {
    let state = test_state().await;
    let u1 = create_principal(state.db(), "u1").await?;
    let room = api::create_room(&state, &u1, "R", false).await?;
    assert_eq!(room.admin.id, u1.id);

    let started = api::start_round(&state, &u1, room.id).await?;
    assert_eq!(started.state, RoundState::Started);

    let paused = api::pause_round(&state, &u1, room.id).await?;
    assert_eq!(paused.state, RoundState::Paused);
    assert!(paused.end_time.is_some());

    let resumed = api::start_round(&state, &u1, room.id).await?;
    assert_eq!(resumed.state, RoundState::Started);
    assert!(resumed.end_time.is_none());
    assert_eq!(resumed.id, started.id);

    let json = serde_json::to_value(&resumed).unwrap();
    assert_eq!(json["state"], "started");
    assert!(json["end_time"].is_null());
    assert!(json["start_time"].is_string());
    Ok(())
}

#[tokio::test]
async fn non_admin_members_are_refused_every_admin_operation() -> Result<(), AppError> {
    let state = test_state().await;
    let admin = create_principal(state.db(), "admin").await?;
    let member = create_principal(state.db(), "member").await?;
    let extra = create_principal(state.db(), "extra").await?;

    let room = api::create_room(&state, &admin, "Club", false).await?;
    api::join_room(&state, &admin, room.id, None).await?;
    api::join_room(&state, &member, room.id, None).await?;
    api::join_room(&state, &extra, room.id, None).await?;
    let team = api::create_team(&state, &admin, room.id, "Reds").await?;

    let denied = [
        api::update_room(&state, &member, room.id, "X", false, 10)
            .await
            .err(),
        api::kick_participant(&state, &member, room.id, extra.id)
            .await
            .err(),
        api::pass_admin_status(&state, &member, room.id, member.id)
            .await
            .err(),
        api::create_team(&state, &member, room.id, "Blues").await.err(),
        api::close_team(&state, &member, team.id).await.err(),
        api::start_round(&state, &member, room.id).await.err(),
        api::pause_round(&state, &member, room.id).await.err(),
        api::close_room(&state, &member, room.id).await.err(),
    ];
    for (i, err) in denied.into_iter().enumerate() {
        let err = err.unwrap_or_else(|| panic!("operation {i} should be refused"));
        assert_eq!(err.code(), ErrorCode::NotAdmin, "operation {i}");
    }

    api::update_room(&state, &admin, room.id, "Club+", true, 12).await?;
    api::kick_participant(&state, &admin, room.id, extra.id).await?;
    api::create_team(&state, &admin, room.id, "Blues").await?;
    api::close_team(&state, &admin, team.id).await?;
    api::start_round(&state, &admin, room.id).await?;
    api::pause_round(&state, &admin, room.id).await?;
    api::pass_admin_status(&state, &admin, room.id, member.id).await?;

    // Authority moved with the transfer.
    api::close_room(&state, &member, room.id).await?;
    Ok(())
}

#[tokio::test]
async fn room_lifecycle_end_to_end() -> Result<(), AppError> {
    let state = test_state().await;
    let alice = create_principal(state.db(), "alice").await?;
    let bob = create_principal(state.db(), "bob").await?;

    let room = api::create_room(&state, &alice, "Secret", true).await?;
    let code = room.invitation_code.clone().expect("admin sees the code");

    // Private rooms never show up in the public list.
    assert!(api::list_public_rooms(&state, &bob).await?.is_empty());

    let err = api::list_members(&state, &bob, room.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotAMember);

    let err = api::join_room(&state, &bob, room.id, Some("nope!"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidInvitationCode);

    api::join_room(&state, &alice, room.id, Some(code.as_str())).await?;
    api::join_room(&state, &bob, room.id, Some(code.as_str())).await?;

    let members = api::list_members(&state, &bob, room.id).await?;
    assert_eq!(members.len(), 2);

    let team = api::create_team(&state, &alice, room.id, "Reds").await?;
    api::join_team(&state, &bob, team.id).await?;
    let teams = api::list_teams(&state, &alice, room.id).await?;
    assert_eq!(teams[0].members[0].name, "bob");

    api::leave_team(&state, &bob, team.id).await?;
    let err = api::leave_team(&state, &bob, team.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::TeamMembershipNotFound);

    api::start_round(&state, &alice, room.id).await?;
    let report = api::close_room(&state, &alice, room.id).await?;
    assert_eq!(report.rooms, 1);
    assert_eq!(report.room_memberships, 2);

    let err = api::close_room(&state, &alice, room.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoomNotFound);
    let err = api::list_teams(&state, &alice, room.id).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::RoomNotFound);

    // Leave on a room that no longer exists is still quiet.
    api::leave_room(&state, &bob, room.id).await?;
    Ok(())
}
