/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;


use noosi_server::NoosiServer;

/// Re-export noosi-server core for convenience
pub use noosi_server;

/// Extension trait that converts a `NoosiServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for NoosiServer {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.into_parts())
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    log::info!("noosi server listening on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}
