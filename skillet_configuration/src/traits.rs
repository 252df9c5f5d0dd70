/// An infallible resolution step from an unresolved configuration
/// structure to its validated counterpart.
pub trait Resolve {
    type Resolved;

    fn resolve(self) -> Self::Resolved;
}


/// Like [`Resolve`], but with access to some previously-resolved context,
/// e.g. the base paths table.
pub trait ResolveWithContext<'r> {
    type Resolved;
    type Context;

    fn resolve_with_context(self, context: Self::Context) -> Self::Resolved;
}


/// Like [`ResolveWithContext`], but for resolution steps that can fail,
/// e.g. parsing a tracing filter.
pub trait TryResolveWithContext<'r> {
    type Resolved;
    type Context;
    type Error;

    fn try_resolve_with_context(self, context: Self::Context)
        -> Result<Self::Resolved, Self::Error>;
}
