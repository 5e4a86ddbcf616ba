//! Then steps for message data BDD scenarios.

use super::world::{MessageWorld, run_async, split_tags};
use parlour::message::services::MessageDataError;
use rstest_bdd_macros::then;

#[then("the message has no tags and default counters")]
fn message_has_defaults(world: &MessageWorld) -> Result<(), eyre::Report> {
    let record = world.message()?.record();

    eyre::ensure!(record.tags().is_empty(), "expected no tags");
    eyre::ensure!(record.likes().is_empty(), "expected no likes");
    eyre::ensure!(record.likes_count() == 0, "expected a zero like count");
    eyre::ensure!(record.reactions().is_empty(), "expected no reactions");
    eyre::ensure!(!record.is_resolved(), "expected an unresolved message");
    eyre::ensure!(!record.is_deleted(), "expected an active message");
    Ok(())
}

#[then("the message references its sender and conversation")]
fn message_references_sender_and_conversation(world: &MessageWorld) -> Result<(), eyre::Report> {
    let message = world.message()?;

    eyre::ensure!(
        Some(message.sender().id) == world.sender_id,
        "sender view does not match the posting user"
    );
    eyre::ensure!(
        Some(message.conversation().id) == world.conversation_id,
        "conversation view does not match the target conversation"
    );
    Ok(())
}

#[then(r#"the message tags are "{tags}""#)]
fn message_tags_are(world: &MessageWorld, tags: String) -> Result<(), eyre::Report> {
    let actual = world.message()?.record().tags();
    let expected = split_tags(&tags);

    eyre::ensure!(
        actual == expected.as_slice(),
        "expected tags {expected:?}, found {actual:?}"
    );
    Ok(())
}

#[then("retrieving the message shows it deleted")]
fn retrieved_message_is_deleted(world: &MessageWorld) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    let fetched = run_async(world.service.get_message(&id.to_string()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;

    eyre::ensure!(fetched.record().is_deleted(), "expected a deleted message");
    Ok(())
}

#[then("retrieving the message shows no tags")]
fn retrieved_message_has_no_tags(world: &MessageWorld) -> Result<(), eyre::Report> {
    let id = world.message()?.id();
    let fetched = run_async(world.service.get_message(&id.to_string()))
        .map_err(|err| eyre::eyre!("lookup failed: {err}"))?;

    eyre::ensure!(
        fetched.record().tags().is_empty(),
        "expected no tags, found {:?}",
        fetched.record().tags()
    );
    Ok(())
}

#[then("the request fails with a not found error")]
fn request_fails_not_found(world: &MessageWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing request result in scenario world"))?;

    eyre::ensure!(
        matches!(result, Err(MessageDataError::NotFound(id)) if Some(*id) == world.target_id),
        "expected a not found error, got {result:?}"
    );
    Ok(())
}
