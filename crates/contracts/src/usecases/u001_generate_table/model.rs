/// Generation strategy used when the form has no checked model
pub const DEFAULT_MODEL: &str = "gan";

/// Known generation strategies: (value, label)
///
/// The wire field stays an open-ended string, the server decides how to
/// treat identifiers it does not know.
pub const MODELS: &[(&str, &str)] = &[("gan", "GAN"), ("vae", "VAE")];
