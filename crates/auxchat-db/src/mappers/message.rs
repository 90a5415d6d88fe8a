//! Message model -> entity mappers

use auxchat_core::entities::{FeedEntry, Message, MessageAuthor};

use crate::models::{FeedRowModel, MessageModel};

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: model.id,
            user_id: model.user_id,
            text: model.text,
            created_at: model.created_at,
        }
    }
}

impl From<FeedRowModel> for FeedEntry {
    fn from(model: FeedRowModel) -> Self {
        FeedEntry {
            message: Message {
                id: model.id,
                user_id: model.user_id,
                text: model.text,
                created_at: model.created_at,
            },
            author: MessageAuthor {
                id: model.user_id,
                username: model.username,
                avatar_url: model.avatar_url,
                first_photo: model.first_photo,
            },
        }
    }
}
