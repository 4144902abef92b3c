//! Service implementations for Slack API methods.
//!
//! Each service groups the Web API methods of one family (`users.*`,
//! `channels.*`, ...). Every method assembles its parameters and goes
//! through [`ApiClient`](crate::client::ApiClient); GET is used for reads
//! and POST for anything that changes state, matching what Slack expects
//! for each method.

pub mod api;
pub mod auth;
pub mod channels;
pub mod chat;
pub mod emoji;
pub mod files;
pub mod groups;
pub mod im;
pub mod oauth;
pub mod presence;
pub mod rtm;
pub mod search;
pub mod stars;
pub mod team;
pub mod users;

pub use api::ApiService;
pub use auth::AuthService;
pub use channels::ChannelsService;
pub use chat::ChatService;
pub use emoji::EmojiService;
pub use files::FilesService;
pub use groups::GroupsService;
pub use im::ImService;
pub use oauth::OAuthService;
pub use presence::PresenceService;
pub use rtm::RtmService;
pub use search::SearchService;
pub use stars::StarsService;
pub use team::TeamService;
pub use users::UsersService;
