use std::env;
use std::error::Error;
use std::str::FromStr;

pub trait FromEnv: Sized {
    fn from_env(env_var: &str) -> anyhow::Result<Self>;
}

impl<T: FromStr> FromEnv for T
where
    <T as FromStr>::Err: 'static + Error + Send + Sync,
{
    fn from_env(env_var: &str) -> anyhow::Result<Self> {
        let value = env::var(env_var)?;
        Ok(T::from_str(&value)?)
    }
}

/// The default only stands in for an unset variable; a variable that is set
/// but unparsable is still a configuration error.
pub fn from_env_or<T: FromEnv>(env_var: &str, default: T) -> anyhow::Result<T> {
    match env::var(env_var) {
        Ok(_) => T::from_env(env_var),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e.into()),
    }
}
