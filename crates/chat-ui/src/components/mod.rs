mod chat_input;
mod chat_widget;
mod confidence_badge;
mod explanation_list;
mod followup_chips;
mod loading_indicator;
mod turn;
mod turn_list;
pub mod viewport;

pub use chat_input::ChatInput;
pub use chat_widget::{ChatWidget, ChatWidgetProps, ServiceHandle};
pub use confidence_badge::ConfidenceBadge;
pub use explanation_list::{ExplanationList, ExplanationListProps};
pub use followup_chips::FollowupChips;
pub use loading_indicator::LoadingIndicator;
pub use turn::{TurnView, TurnViewProps};
pub use turn_list::TurnList;
pub use viewport::{ElementViewport, Viewport, ViewportHandle};
