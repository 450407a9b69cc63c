use crate::application::configuration::app::{AppConfiguration, AppConfigurationBuilder};
use crate::application::configuration::storage::{
    StorageConfiguration, StorageConfigurationBuilder,
};
use dotenvy::{dotenv, from_filename};
use std::collections::HashMap;

pub struct ConfigurationBuilder {
    pub app: AppConfigurationBuilder,
    pub storage: StorageConfigurationBuilder,
}

impl ConfigurationBuilder {
    pub fn new(app: AppConfigurationBuilder, storage: StorageConfigurationBuilder) -> Self {
        ConfigurationBuilder { app, storage }
    }

    pub fn build(&self) -> Configuration {
        Configuration::new(self.app.build(), self.storage.build())
    }
}

/// Process wide settings, resolved once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Configuration {
    app: AppConfiguration,
    storage: StorageConfiguration,
}

impl Configuration {
    pub fn new(app: AppConfiguration, storage: StorageConfiguration) -> Self {
        Configuration { app, storage }
    }

    pub fn load<F>(loader: F) -> Self
    where
        F: FnOnce(
            AppConfigurationBuilder,
            StorageConfigurationBuilder,
        ) -> (AppConfiguration, StorageConfiguration),
    {
        let (app, storage) = loader(
            AppConfigurationBuilder::new(),
            StorageConfigurationBuilder::new(),
        );

        Configuration { app, storage }
    }

    pub fn envs(&self) -> HashMap<String, String> {
        let mut envs = HashMap::new();
        envs.extend(self.app.envs());
        envs.extend(self.storage.envs());

        envs
    }

    pub fn app(&self) -> &AppConfiguration {
        &self.app
    }

    pub fn storage(&self) -> &StorageConfiguration {
        &self.storage
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::load(|mut app, mut storage| {
            from_filename(".env.local").or(dotenv()).ok();

            (app.load_env().build(), storage.load_env().build())
        })
    }
}
