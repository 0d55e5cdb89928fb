use super::surface::DrawSurface;

/// Two-method lifecycle contract between a hosting UI tree and the scene.
///
/// A host must call `activate` exactly once per activation and `deactivate`
/// exactly once per deactivation, in that order, with no overlapping
/// activations. `activate` with no surface (not yet mounted) is benign and
/// yields no session. Any UI framework, or a plain event-driven runner, can
/// implement this.
pub trait SceneLifecycle {
    /// The live scene session produced by a successful activation; giving it
    /// back to `deactivate` is what releases its resources.
    type Session;

    fn activate(&mut self, surface: Option<&dyn DrawSurface>) -> Option<Self::Session>;

    fn deactivate(&mut self, session: Self::Session);
}
