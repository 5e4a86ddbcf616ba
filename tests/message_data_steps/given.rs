//! Given steps for message data BDD scenarios.

use super::world::{MessageWorld, run_async, split_tags};
use eyre::WrapErr;
use parlour::message::{
    domain::{ConversationId, MessageId, UserId},
    services::CreateMessageInput,
};
use rstest_bdd_macros::given;

#[given("a conversation and a sender")]
fn conversation_and_sender(world: &mut MessageWorld) {
    world.conversation_id = Some(ConversationId::new());
    world.sender_id = Some(UserId::new());
}

#[given(r#"a posted message "{text}" without tags"#)]
fn posted_message(world: &mut MessageWorld, text: String) -> Result<(), eyre::Report> {
    post(world, text, None)
}

#[given(r#"a posted message "{text}" with tags "{tags}""#)]
fn posted_message_with_tags(
    world: &mut MessageWorld,
    text: String,
    tags: String,
) -> Result<(), eyre::Report> {
    post(world, text, Some(split_tags(&tags)))
}

#[given("an unknown message id")]
fn unknown_message_id(world: &mut MessageWorld) {
    world.target_id = Some(MessageId::new());
}

fn post(
    world: &mut MessageWorld,
    text: String,
    tags: Option<Vec<String>>,
) -> Result<(), eyre::Report> {
    let input = CreateMessageInput::new(ConversationId::new(), text);
    let created = run_async(world.service.create(input, UserId::new(), tags))
        .wrap_err("create message for scenario")?;

    world.target_id = Some(created.id());
    world.last_message = Some(created);
    Ok(())
}
