use derive_builder::Builder;

/// Configuration for one render pass.
///
/// Every [`Attributes`](crate::Attributes) created from the same options
/// value behaves the same, so building one `RenderOptions` per pass and
/// seeding each accumulator from it gives the whole pass a single switch
/// without any process-wide state.
///
/// ```
/// use sepal_core::RenderOptionsBuilder;
///
/// let options = RenderOptionsBuilder::default()
///     .test_attributes(false)
///     .build()
///     .unwrap();
/// assert!(!options.test_attributes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
#[builder(pattern = "immutable")]
pub struct RenderOptions {
    /// Whether the `data-test` diagnostic attribute is written at all.
    ///
    /// On by default; automated UI tests rely on it. Production renders
    /// typically turn it off.
    #[builder(default = "true")]
    pub test_attributes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            test_attributes: true,
        }
    }
}
