use serenity::all::{ChannelId, Permissions, UserId};

#[derive(Debug, thiserror::Error)]
pub enum PaginatorError {
    #[error(
        "bot lacks the `{}` permission to paginate in channel {channel} (command `{command}` by {author_name} ({author_id}))",
        .permission.get_permission_names().join(", ")
    )]
    PermissionDenied {
        permission: Permissions,
        channel: ChannelId,
        command: String,
        author_id: UserId,
        author_name: String,
    },
    #[error("failed to deliver paginated message: {0}")]
    Delivery(#[from] serenity::Error),
}
