//! Integration tests for the `MessageData` create, get, delete, and update
//! flows against the in-memory adapter.

use super::helpers::{
    TestMessageData, conversation_id, create_hello, message_data, sender_id, tags,
};
use parlour::message::{
    domain::{ConversationId, MessageId, UserId},
    services::MessageDataError,
};
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_message_matches_response_contract(
    message_data: TestMessageData,
    conversation_id: ConversationId,
    sender_id: UserId,
) -> Result<(), eyre::Report> {
    let message = create_hello(&message_data, conversation_id, sender_id, None).await?;
    let value = serde_json::to_value(&message)?;

    let expected = json!({
        "likes": [],
        "resolved": false,
        "deleted": false,
        "reactions": [],
        "text": "Hello world",
        "senderId": sender_id.to_string(),
        "conversationId": conversation_id.to_string(),
        "conversation": { "id": conversation_id.to_string() },
        "likesCount": 0,
        "sender": { "id": sender_id.to_string() },
        "tags": [],
    });
    let (Some(actual), Some(expected_fields)) = (value.as_object(), expected.as_object()) else {
        return Err(eyre::eyre!("expected JSON objects"));
    };
    for (key, expected_value) in expected_fields {
        eyre::ensure!(
            actual.get(key) == Some(expected_value),
            "field {key}: expected {expected_value}, found {:?}",
            actual.get(key)
        );
    }
    Ok(())
}

#[rstest]
#[case::one_tag(&["firstTAG"])]
#[case::three_tags(&["firstTAG", "secondTAG", "thirdTAG"])]
#[tokio::test(flavor = "multi_thread")]
async fn created_message_keeps_tag_order(
    message_data: TestMessageData,
    conversation_id: ConversationId,
    sender_id: UserId,
    #[case] supplied: &[&str],
) -> Result<(), eyre::Report> {
    let message =
        create_hello(&message_data, conversation_id, sender_id, Some(tags(supplied))).await?;

    eyre::ensure!(
        message.record().tags() == tags(supplied).as_slice(),
        "tags differ: {:?}",
        message.record().tags()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn get_message_matches_created_message(
    message_data: TestMessageData,
    conversation_id: ConversationId,
    sender_id: UserId,
) -> Result<(), eyre::Report> {
    let sent = create_hello(&message_data, conversation_id, sender_id, None).await?;

    let got = message_data.get_message(&sent.id().to_string()).await?;

    eyre::ensure!(got == sent, "retrieved message differs from created one");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_message_is_still_retrievable_and_flagged(
    message_data: TestMessageData,
    conversation_id: ConversationId,
    sender_id: UserId,
) -> Result<(), eyre::Report> {
    let message = create_hello(&message_data, conversation_id, sender_id, None).await?;
    eyre::ensure!(!message.record().is_deleted(), "new message starts deleted");

    message_data.delete(message.id()).await?;
    let retrieved = message_data.get_message(&message.id().to_string()).await?;
    eyre::ensure!(retrieved.record().is_deleted(), "message was not marked deleted");

    message_data.delete(message.id()).await?;
    let again = message_data.get_message(&message.id().to_string()).await?;
    eyre::ensure!(again.record().is_deleted(), "second delete revived the message");
    Ok(())
}

#[rstest]
#[case::empty(&[])]
#[case::non_empty(&["TAG3"])]
#[tokio::test(flavor = "multi_thread")]
async fn update_message_replaces_tags(
    message_data: TestMessageData,
    conversation_id: ConversationId,
    sender_id: UserId,
    #[case] replacement: &[&str],
) -> Result<(), eyre::Report> {
    let sent = create_hello(
        &message_data,
        conversation_id,
        sender_id,
        Some(tags(&["TAG1", "TAG2"])),
    )
    .await?;
    eyre::ensure!(
        sent.record().tags() == tags(&["TAG1", "TAG2"]).as_slice(),
        "message did not start with two tags"
    );

    let updated = message_data
        .update_message(sent.id(), tags(replacement))
        .await?;
    let got_after_update = message_data.get_message(&sent.id().to_string()).await?;

    eyre::ensure!(
        updated.record().tags() == tags(replacement).as_slice(),
        "update returned tags {:?}",
        updated.record().tags()
    );
    eyre::ensure!(
        got_after_update.record().tags() == tags(replacement).as_slice(),
        "stored tags {:?} after update",
        got_after_update.record().tags()
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn operations_on_unknown_id_report_not_found(message_data: TestMessageData) {
    let missing = MessageId::new();

    let get = message_data.get_message(&missing.to_string()).await;
    let delete = message_data.delete(missing).await;
    let update = message_data.update_message(missing, tags(&["x"])).await;

    assert!(matches!(get, Err(MessageDataError::NotFound(id)) if id == missing));
    assert!(matches!(delete, Err(MessageDataError::NotFound(id)) if id == missing));
    assert!(matches!(update, Err(MessageDataError::NotFound(id)) if id == missing));
}
