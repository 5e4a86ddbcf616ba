//! Diesel schema for chat message persistence.

diesel::table! {
    /// Chat message records with raw sender and conversation identifiers.
    chat_messages (id) {
        /// Message identifier generated by the database.
        id -> Uuid,
        /// Owning conversation identifier.
        conversation_id -> Uuid,
        /// Authoring user identifier.
        sender_id -> Uuid,
        /// Message body.
        text -> Text,
        /// Ordered message tags.
        tags -> Array<Text>,
        /// Users who liked the message.
        likes -> Array<Uuid>,
        /// Stored like counter.
        likes_count -> Int8,
        /// Reaction records.
        reactions -> Jsonb,
        /// Resolution flag.
        resolved -> Bool,
        /// Soft-delete flag.
        deleted -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Latest mutation timestamp.
        updated_at -> Timestamptz,
    }
}
