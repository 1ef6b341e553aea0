use calltree_diagram::Grammar;

/// External rewrite of a rendered diagram (for example a language model that
/// restyles it).
///
/// The analyzer only keeps the rewrite when it still opens with the grammar
/// marker; errors and malformed output fall back to the original rendering.
pub trait DiagramEnhancer: Send + Sync {
    fn enhance(&self, diagram: &str, grammar: Grammar) -> anyhow::Result<String>;
}

impl<F> DiagramEnhancer for F
where
    F: Fn(&str, Grammar) -> anyhow::Result<String> + Send + Sync,
{
    fn enhance(&self, diagram: &str, grammar: Grammar) -> anyhow::Result<String> {
        self(diagram, grammar)
    }
}
