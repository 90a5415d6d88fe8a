//! Private message model -> entity mappers

use auxchat_core::entities::{ConversationMessage, ConversationSummary, PrivateMessage};

use crate::models::{ConversationMessageModel, ConversationSummaryModel, PrivateMessageModel};

impl From<PrivateMessageModel> for PrivateMessage {
    fn from(model: PrivateMessageModel) -> Self {
        PrivateMessage {
            id: model.id,
            sender_id: model.sender_id,
            receiver_id: model.receiver_id,
            text: model.text,
            is_read: model.is_read,
            created_at: model.created_at,
        }
    }
}

impl From<ConversationMessageModel> for ConversationMessage {
    fn from(model: ConversationMessageModel) -> Self {
        ConversationMessage {
            message: PrivateMessage {
                id: model.id,
                sender_id: model.sender_id,
                receiver_id: model.receiver_id,
                text: model.text,
                is_read: model.is_read,
                created_at: model.created_at,
            },
            sender_username: model.sender_username,
            sender_avatar_url: model.sender_avatar_url,
        }
    }
}

impl From<ConversationSummaryModel> for ConversationSummary {
    fn from(model: ConversationSummaryModel) -> Self {
        ConversationSummary {
            counterpart_id: model.counterpart_id,
            username: model.username,
            avatar_url: model.avatar_url,
            last_activity: model.last_activity,
            last_message: model.last_message,
            last_message_at: model.last_message_at,
            unread_count: model.unread_count,
        }
    }
}
