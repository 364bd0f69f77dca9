mod tree;

pub use tree::codec::{MAX_DEPTH, Tag, parse_node, write_node};
pub use tree::config::{ConfigError, GameConfig};
pub use tree::error::TreeError;
pub use tree::node::Node;
pub use tree::question_tree::{GameOutcome, QuestionTree};
pub use tree::snapshot::{NodeSnapshot, TreeSnapshot};
pub use tree::stats::GameStats;
pub use tree::ui::{ScriptedUi, UserInterface};
