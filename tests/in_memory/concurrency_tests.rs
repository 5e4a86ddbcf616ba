//! Concurrency tests for `MessageData` over the in-memory adapter.

use std::collections::HashSet;

use super::helpers::{TestMessageData, create_hello, message_data, tags};
use parlour::message::domain::{ConversationId, UserId};
use rstest::rstest;

const TASKS: usize = 16;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creates_get_distinct_ids(
    message_data: TestMessageData,
) -> Result<(), eyre::Report> {
    let conversation_id = ConversationId::new();
    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let service = message_data.clone();
            tokio::spawn(async move {
                create_hello(&service, conversation_id, UserId::new(), None).await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let message = handle.await??;
        ids.insert(message.id());
    }

    eyre::ensure!(ids.len() == TASKS, "expected {TASKS} ids, got {}", ids.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_deletes_all_succeed(message_data: TestMessageData) -> Result<(), eyre::Report> {
    let message = create_hello(&message_data, ConversationId::new(), UserId::new(), None).await?;
    let handles: Vec<_> = (0..TASKS)
        .map(|_| {
            let service = message_data.clone();
            let id = message.id();
            tokio::spawn(async move { service.delete(id).await })
        })
        .collect();

    for handle in handles {
        let deleted = handle.await??;
        eyre::ensure!(deleted.record().is_deleted(), "delete returned an active message");
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_tag_updates_leave_one_whole_tag_list(
    message_data: TestMessageData,
) -> Result<(), eyre::Report> {
    let message = create_hello(&message_data, ConversationId::new(), UserId::new(), None).await?;
    let candidates: Vec<Vec<String>> = (0..TASKS)
        .map(|n| {
            let first = format!("writer-{n}-a");
            let second = format!("writer-{n}-b");
            tags(&[first.as_str(), second.as_str()])
        })
        .collect();

    let handles: Vec<_> = candidates
        .iter()
        .cloned()
        .map(|candidate| {
            let service = message_data.clone();
            let id = message.id();
            tokio::spawn(async move { service.update_message(id, candidate).await })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let last = message_data.get_message(&message.id().to_string()).await?;
    eyre::ensure!(
        candidates
            .iter()
            .any(|candidate| candidate.as_slice() == last.record().tags()),
        "final tags {:?} are not one writer's complete list",
        last.record().tags()
    );
    Ok(())
}
