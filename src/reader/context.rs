/// One frame of inherited reference-system and dimension metadata.
#[derive(Debug, Clone, Default)]
struct Frame {
    srs_name: Option<String>,
    dimension: Option<usize>,
}

/// Stack of metadata frames threaded through recursive reads.
///
/// A frame is pushed on entering a geometry element and popped on return.
/// Values an element does not declare are inherited from the nearest
/// enclosing frame, so a single `last()` lookup resolves both fields. The
/// context lives for one parse call only.
#[derive(Debug, Default)]
pub struct ParseContext {
    frames: Vec<Frame>,
}

impl ParseContext {
    pub fn new() -> Self {
        Default::default()
    }

    /// A context seeded with caller-known metadata, e.g. the reference
    /// system a surrounding feature collection declared.
    pub fn with_defaults(srs_name: Option<&str>, dimension: Option<usize>) -> Self {
        let mut context = Self::new();
        context.push(srs_name, dimension);
        context
    }

    /// Pushes a frame, inheriting any value the new scope does not declare.
    pub(crate) fn push(&mut self, srs_name: Option<&str>, dimension: Option<usize>) {
        let frame = Frame {
            srs_name: srs_name
                .map(str::to_owned)
                .or_else(|| self.srs_name().map(str::to_owned)),
            dimension: dimension.or_else(|| self.dimension()),
        };
        self.frames.push(frame);
    }

    pub(crate) fn pop(&mut self) {
        self.frames.pop();
    }

    /// Reference system declared by the nearest enclosing element.
    pub fn srs_name(&self) -> Option<&str> {
        self.frames.last().and_then(|frame| frame.srs_name.as_deref())
    }

    /// Coordinate dimension declared by the nearest enclosing element.
    pub fn dimension(&self) -> Option<usize> {
        self.frames.last().and_then(|frame| frame.dimension)
    }
}
