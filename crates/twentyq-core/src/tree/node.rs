use crate::tree::codec::Tag;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One entry of the decision tree.
/// A question always owns both of its answers, so a node has either zero or two children.
pub enum Node {
    /// Object the computer can guess.
    Answer { text: String },
    /// Yes/no question leading to two subtrees.
    Question {
        text: String,
        yes: Box<Node>,
        no: Box<Node>,
    },
}

impl Node {
    /// Create a leaf holding an object to guess
    pub fn answer(text: impl Into<String>) -> Self {
        Node::Answer { text: text.into() }
    }

    /// Create a question node from its text and both subtrees
    pub fn question(text: impl Into<String>, yes: Node, no: Node) -> Self {
        Node::Question {
            text: text.into(),
            yes: Box::new(yes),
            no: Box::new(no),
        }
    }

    /// Return the question or answer text of this node
    pub fn text(&self) -> &str {
        match self {
            Node::Answer { text } | Node::Question { text, .. } => text,
        }
    }

    /// Check function to see if a node is a leaf
    pub fn is_answer(&self) -> bool {
        matches!(self, Node::Answer { .. })
    }

    /// Return the subtree followed on a "yes" response, if any
    pub fn yes(&self) -> Option<&Node> {
        match self {
            Node::Answer { .. } => None,
            Node::Question { yes, .. } => Some(yes),
        }
    }

    /// Return the subtree followed on a "no" response, if any
    pub fn no(&self) -> Option<&Node> {
        match self {
            Node::Answer { .. } => None,
            Node::Question { no, .. } => Some(no),
        }
    }

    /// Record tag used when writing this node to the text format
    pub fn tag(&self) -> Tag {
        match self {
            Node::Answer { .. } => Tag::Answer,
            Node::Question { .. } => Tag::Question,
        }
    }

    /// Count every node in this subtree, including itself
    pub fn node_count(&self) -> usize {
        match self {
            Node::Answer { .. } => 1,
            Node::Question { yes, no, .. } => 1 + yes.node_count() + no.node_count(),
        }
    }

    /// Number of questions on the longest path from this node down to a leaf
    pub fn depth(&self) -> usize {
        match self {
            Node::Answer { .. } => 0,
            Node::Question { yes, no, .. } => 1 + yes.depth().max(no.depth()),
        }
    }

    /// Leaf texts in preorder (yes side before no side)
    pub fn answers(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_answers(&mut out);
        out
    }

    fn collect_answers<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Answer { text } => out.push(text),
            Node::Question { yes, no, .. } => {
                yes.collect_answers(out);
                no.collect_answers(out);
            }
        }
    }
}
