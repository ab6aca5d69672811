//! The seam between the controller and the backend it polls.

use std::future::Future;
use std::sync::Arc;

use brandpulse_client::{ClientError, DashboardClient};
use brandpulse_core::{BrandCatalog, DashboardSnapshot};

/// Remote operations the dashboard controller depends on.
///
/// [`DashboardClient`] is the production implementation. Tests substitute a
/// scripted source to control when each response arrives.
pub trait DataSource: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    fn fetch_dashboard(
        &self,
    ) -> impl Future<Output = Result<DashboardSnapshot, Self::Error>> + Send;

    fn fetch_catalog(&self) -> impl Future<Output = Result<BrandCatalog, Self::Error>> + Send;

    /// Ask the backend to start collecting. Only success or failure of the
    /// request itself is reported; the collection may still be running.
    fn trigger_collection(&self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl DataSource for DashboardClient {
    type Error = ClientError;

    fn fetch_dashboard(
        &self,
    ) -> impl Future<Output = Result<DashboardSnapshot, Self::Error>> + Send {
        DashboardClient::fetch_dashboard(self)
    }

    fn fetch_catalog(&self) -> impl Future<Output = Result<BrandCatalog, Self::Error>> + Send {
        DashboardClient::fetch_brands(self)
    }

    fn trigger_collection(&self) -> impl Future<Output = Result<(), Self::Error>> + Send {
        DashboardClient::trigger_collection(self)
    }
}

impl<T: DataSource> DataSource for Arc<T> {
    type Error = T::Error;

    fn fetch_dashboard(
        &self,
    ) -> impl Future<Output = Result<DashboardSnapshot, Self::Error>> + Send {
        T::fetch_dashboard(self)
    }

    fn fetch_catalog(&self) -> impl Future<Output = Result<BrandCatalog, Self::Error>> + Send {
        T::fetch_catalog(self)
    }

    fn trigger_collection(&self) -> impl Future<Output = Result<(), Self::Error>> + Send {
        T::trigger_collection(self)
    }
}
