//! Reaction model -> entity mapper

use auxchat_core::entities::ReactionCount;

use crate::models::ReactionCountModel;

impl From<ReactionCountModel> for ReactionCount {
    fn from(model: ReactionCountModel) -> Self {
        ReactionCount {
            message_id: model.message_id,
            emoji: model.emoji,
            count: model.count,
        }
    }
}
