use crate::app::AppContext;
use crate::app::resolve::{VHostRequest, resolve};
use crate::domain::{AppError, VHostConfig, vhost_template};
use crate::ports::{PlatformInfo, ServiceControl, SiteStore};

/// Rendered configuration together with the record it came from.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    pub config: VHostConfig,
    pub text: String,
}

/// Resolve the request and render it without touching the filesystem.
pub fn execute<P, S, C>(
    ctx: &AppContext<P, S, C>,
    request: &VHostRequest,
) -> Result<RenderOutcome, AppError>
where
    P: PlatformInfo,
    S: SiteStore,
    C: ServiceControl,
{
    let config = resolve(request, ctx.settings(), ctx.platform())?;
    let text = vhost_template::render(&config)?;
    Ok(RenderOutcome { config, text })
}
