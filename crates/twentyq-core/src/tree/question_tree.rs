use std::io::{BufRead, Write};
use std::mem;

use log::{debug, info};

use crate::tree::{
    codec::{parse_node, write_node},
    config::GameConfig,
    error::TreeError,
    node::Node,
    snapshot::TreeSnapshot,
    stats::GameStats,
    ui::UserInterface,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Result of one game from the computer's point of view.
pub enum GameOutcome {
    ComputerWon,
    PlayerWon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// owns the root of the decision tree and the session counters
/// the root is replaced wholesale by `load` and may grow during `play`
pub struct QuestionTree {
    root: Node,
    stats: GameStats,
}

impl Default for QuestionTree {
    fn default() -> Self {
        QuestionTree::new()
    }
}

impl QuestionTree {
    /// Create a tree holding the single answer "computer".
    pub fn new() -> Self {
        QuestionTree::from_config(&GameConfig::default())
    }

    /// Create a tree whose only answer comes from `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        QuestionTree::with_root(Node::answer(config.initial_answer()))
    }

    /// Create a tree from an existing root with fresh counters.
    pub fn with_root(root: Node) -> Self {
        QuestionTree {
            root,
            stats: GameStats::new(),
        }
    }

    /// Borrow the current root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Play one game: ask questions down to a leaf, guess it, and learn a new
    /// object from the player when the guess is wrong.
    pub fn play<U: UserInterface + ?Sized>(&mut self, ui: &mut U) -> GameOutcome {
        let outcome = descend(&mut self.root, ui);
        self.stats.record(outcome == GameOutcome::ComputerWon);
        debug!(
            "game {} finished: {:?} (tree now has {} nodes)",
            self.stats.games_played(),
            outcome,
            self.root.node_count()
        );
        outcome
    }

    /// Write the whole tree to `sink` in preorder, one record per line.
    pub fn save<W: Write + ?Sized>(&self, sink: &mut W) -> Result<(), TreeError> {
        write_node(&self.root, sink)?;
        sink.flush()?;
        info!("saved question tree with {} nodes", self.root.node_count());
        Ok(())
    }

    /// Replace the tree with the one read from `source`.
    /// On error the current tree is left untouched.
    pub fn load<R: BufRead>(&mut self, source: R) -> Result<(), TreeError> {
        let root = parse_node(source)?;
        info!("loaded question tree with {} nodes", root.node_count());
        self.root = root;
        Ok(())
    }

    /// Render the tree in the text format.
    pub fn to_text(&self) -> String {
        let mut buf = Vec::new();
        write_node(&self.root, &mut buf).expect("writing to a Vec cannot fail");
        String::from_utf8(buf).expect("node text is always valid UTF-8")
    }

    /// Build a fresh tree from text in the save format.
    pub fn from_text(text: &str) -> Result<Self, TreeError> {
        parse_node(text.as_bytes()).map(QuestionTree::with_root)
    }

    /// Total games played in this session.
    pub fn total_games_played(&self) -> u64 {
        self.stats.games_played()
    }

    /// Games in this session where the computer guessed right.
    pub fn total_games_won(&self) -> u64 {
        self.stats.games_won()
    }

    /// Copy of the session counters.
    pub fn stats(&self) -> GameStats {
        self.stats
    }

    /// Capture a serializable view of the tree and counters.
    pub fn snapshot(&self) -> TreeSnapshot {
        TreeSnapshot::capture(&self.root, self.stats)
    }
}

/// Walk one game from `node`. Only the losing leaf is replaced; every question on
/// the path stays where it is.
fn descend<U: UserInterface + ?Sized>(node: &mut Node, ui: &mut U) -> GameOutcome {
    match node {
        Node::Question { text, yes, no } => {
            ui.print(text);
            if ui.read_bool() {
                descend(yes, ui)
            } else {
                descend(no, ui)
            }
        }
        Node::Answer { .. } => {
            ui.print(&format!("Would your object happen to be {}?", node.text()));
            if ui.read_bool() {
                ui.print("I win!");
                return GameOutcome::ComputerWon;
            }
            let leaf = mem::replace(node, Node::answer(String::new()));
            *node = grow(leaf, ui);
            GameOutcome::PlayerWon
        }
    }
}

/// Turn the wrongly guessed leaf into a question separating it from the player's object.
fn grow<U: UserInterface + ?Sized>(leaf: Node, ui: &mut U) -> Node {
    ui.print("I lose. What is your object?");
    let answer = ui.read_line();
    ui.print(&format!(
        "Type a yes/no question to distinguish your item from {}:",
        leaf.text()
    ));
    let question = ui.read_line();
    ui.print("And what is the answer for your object?");

    debug!("learned '{answer}' apart from '{}' via '{question}'", leaf.text());
    if ui.read_bool() {
        Node::question(question, Node::answer(answer), leaf)
    } else {
        Node::question(question, leaf, Node::answer(answer))
    }
}
