//! Application state shared across handlers

use std::sync::Arc;

use topsaas_core::Settings;

use crate::gateway::GatewayClient;
use crate::repos::{
    CompanyRepo, CompanyRepository, IndustryRepo, IndustryRepository, LocationRepo,
    LocationRepository,
};

/// What the health endpoint reports about this deployment
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
}

impl From<&Settings> for AppInfo {
    fn from(settings: &Settings) -> Self {
        Self {
            name: settings.app_name.clone(),
            version: settings.app_version.clone(),
            environment: settings.environment.clone(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    info: AppInfo,
    companies: Arc<dyn CompanyRepository>,
    industries: Arc<dyn IndustryRepository>,
    locations: Arc<dyn LocationRepository>,
}

impl AppState {
    pub fn new(
        info: AppInfo,
        companies: Arc<dyn CompanyRepository>,
        industries: Arc<dyn IndustryRepository>,
        locations: Arc<dyn LocationRepository>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                info,
                companies,
                industries,
                locations,
            }),
        }
    }

    /// State with every repository backed by the same gateway client.
    pub fn with_gateway(info: AppInfo, client: GatewayClient) -> Self {
        Self::new(
            info,
            Arc::new(CompanyRepo::new(client.clone())),
            Arc::new(IndustryRepo::new(client.clone())),
            Arc::new(LocationRepo::new(client)),
        )
    }

    pub fn info(&self) -> &AppInfo {
        &self.inner.info
    }

    pub fn companies(&self) -> &dyn CompanyRepository {
        self.inner.companies.as_ref()
    }

    pub fn industries(&self) -> &dyn IndustryRepository {
        self.inner.industries.as_ref()
    }

    pub fn locations(&self) -> &dyn LocationRepository {
        self.inner.locations.as_ref()
    }
}
