/**
 * All of the regex syntax-tree (AST) data-structures, and the generation of
 * random samples from them.
 */

use rand::Rng;

/// The repetition count standing in for "no upper bound". Finite, so that
/// generation always terminates.
pub const UNBOUNDED: usize = i32::max_value() as usize;

/// Backtracking preference of a quantifier. Only tracked while parsing, there
/// is no matcher that would act on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Greedy,
    Lazy,
    Possessive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Char{
        value: char,
        case_sensitive: bool,
    },

    String{
        value: Vec<char>,
        case_sensitive: bool,
    },

    /// Concatenation, the empty sequence matches the empty string
    Sequence(Vec<Node>),

    Alternates(Vec<Node>),

    Optional{
        node: Box<Node>,
        modifier: Modifier,
    },

    Repeat{
        node: Box<Node>,
        min: usize,
        max: usize,
        modifier: Modifier,
    },
}

impl Node {
    pub fn empty() -> Self {
        Node::Sequence(Vec::new())
    }

    /// A sequence of the nodes, without wrapping if there are less than two.
    pub fn sequence(mut nodes: Vec<Node>) -> Self {
        if nodes.len() == 1 {
            nodes.remove(0)
        }
        else {
            Node::Sequence(nodes)
        }
    }

    /// Alternatives of the nodes, without wrapping if there are less than two.
    pub fn alternates(mut nodes: Vec<Node>) -> Self {
        match nodes.len() {
            0 => Node::empty(),
            1 => nodes.remove(0),
            _ => Node::Alternates(nodes),
        }
    }

    /// Checks if the node can be the operand of a quantifier.
    pub fn is_repeatable(&self) -> bool {
        match self {
            Node::Char{ .. } | Node::String{ .. } => true,
            Node::Sequence(_) | Node::Alternates(_) | Node::Optional{ .. } | Node::Repeat{ .. } => false,
        }
    }

    /// Lazily generates a random sample of (code point, case sensitive)
    /// pairs. Every call is an independent sample.
    pub fn generate<'a, R>(&'a self, rng: &'a mut R) -> Sample<'a, R> where R : Rng + ?Sized {
        Sample{ stack: vec![Frame::Visit(self)], rng }
    }
}

/**
 * Streaming generation with an explicit stack, so only the path to the active
 * node is kept around.
 */

enum Frame<'a> {
    Visit(&'a Node),
    Chars{
        rest: &'a [char],
        case_sensitive: bool,
    },
    Children(&'a [Node]),
    Repeat{
        node: &'a Node,
        done: usize,
        min: usize,
        max: usize,
    },
}

pub struct Sample<'a, R> where R : ?Sized {
    stack: Vec<Frame<'a>>,
    rng: &'a mut R,
}

impl <'a, R> Sample<'a, R> where R : Rng + ?Sized {
    /// The random source the sample is drawn with.
    pub fn rng(&mut self) -> &mut R {
        &mut *self.rng
    }
}

impl <'a, R> Iterator for Sample<'a, R> where R : Rng + ?Sized {
    type Item = (char, bool);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Visit(node) => match node {
                    Node::Char{ value, case_sensitive } => return Some((*value, *case_sensitive)),

                    Node::String{ value, case_sensitive } =>
                        self.stack.push(Frame::Chars{ rest: value.as_slice(), case_sensitive: *case_sensitive }),

                    Node::Sequence(children) => self.stack.push(Frame::Children(children.as_slice())),

                    Node::Alternates(children) => {
                        if !children.is_empty() {
                            let idx = self.rng.gen_range(0, children.len());
                            self.stack.push(Frame::Visit(&children[idx]));
                        }
                    },

                    Node::Optional{ node, .. } => {
                        if self.rng.gen_bool(0.5) {
                            self.stack.push(Frame::Visit(&**node));
                        }
                    },

                    Node::Repeat{ node, min, max, .. } =>
                        self.stack.push(Frame::Repeat{ node: &**node, done: 0, min: *min, max: *max }),
                },

                Frame::Chars{ rest, case_sensitive } => {
                    if let Some((first, rest)) = rest.split_first() {
                        self.stack.push(Frame::Chars{ rest, case_sensitive });
                        return Some((*first, case_sensitive));
                    }
                },

                Frame::Children(children) => {
                    if let Some((first, rest)) = children.split_first() {
                        self.stack.push(Frame::Children(rest));
                        self.stack.push(Frame::Visit(first));
                    }
                },

                Frame::Repeat{ node, done, min, max } => {
                    if done < max && (done < min || self.rng.gen_bool(0.5)) {
                        self.stack.push(Frame::Repeat{ node, done: done + 1, min, max });
                        self.stack.push(Frame::Visit(node));
                    }
                },
            }
        }
    }
}

// Tests ///////////////////////////////////////////////////////////////////////
