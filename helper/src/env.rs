/// Declare a constant holding the name of an environment variable.
#[macro_export]
macro_rules! env_var {
    ($name:ident) => {
        const $name: &'static str = stringify!($name);
    };
}

/// Load an environment variable into a validated type.
///
/// Expands to `?` expressions, so it must be used inside a function
/// returning `anyhow::Result` with `anyhow::Context` in scope.
#[macro_export]
macro_rules! env_load {
    ($type:ident, $name:ident) => {
        $type::try_new(
            std::env::var($name)
                .with_context(|| format!("Missing {} env var", $name))?,
        )
        .with_context(|| format!("{} was not formatted right", $name))?
    };
    ($type:ident, $name:ident, $type_raw:ident) => {
        $type::try_new(
            std::env::var($name)
                .with_context(|| format!("Missing {} env var", $name))?
                .parse::<$type_raw>()
                .with_context(|| {
                    format!(
                        "{} env var cannot be parsed in the correct type",
                        $name
                    )
                })?,
        )
        .with_context(|| format!("{} was not formatted right", $name))?
    };
    ($type:ident, $name:ident, $type_raw:ident, $default:expr) => {
        $type::try_new(match std::env::var($name) {
            Ok(raw) => raw.parse::<$type_raw>().with_context(|| {
                format!(
                    "{} env var cannot be parsed in the correct type",
                    $name
                )
            })?,
            Err(std::env::VarError::NotPresent) => $default,
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("{} env var is invalid", $name))
            }
        })
        .with_context(|| format!("{} was not formatted right", $name))?
    };
}
