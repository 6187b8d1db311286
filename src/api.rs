use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_net::http::{Request, Response};
use urlencoding::encode;

use crate::config::Config;
use crate::error::ApiError;
use crate::model::{Activities, ErrorReply, SignupReply};

pub type Reply<T> = Pin<Box<dyn Future<Output = Result<T, ApiError>>>>;

/// The three calls the roster view makes against the backend.
pub trait Backend {
    fn list_activities(&self) -> Reply<Activities>;
    /// Resolves to the backend's confirmation message.
    fn signup(&self, activity: &str, email: &str) -> Reply<String>;
    fn unregister(&self, activity: &str, email: &str) -> Reply<()>;
}

/// Shared backend handed to the view. Equal only to clones of itself.
#[derive(Clone)]
pub struct BackendHandle(Rc<dyn Backend>);

impl BackendHandle {
    pub fn new(backend: impl Backend + 'static) -> Self {
        Self(Rc::new(backend))
    }
}

impl std::ops::Deref for BackendHandle {
    type Target = dyn Backend;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.0) as *const () == Rc::as_ptr(&other.0) as *const ()
    }
}

/// HTTP client for the three activity endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterApi {
    base: String,
}

impl RosterApi {
    pub fn new(config: &Config) -> Self {
        Self {
            base: config.api_base.clone(),
        }
    }

    pub fn activities_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    pub fn signup_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }

    pub fn participant_url(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/participants?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }
}

impl Backend for RosterApi {
    fn list_activities(&self) -> Reply<Activities> {
        let url = self.activities_url();
        Box::pin(async move {
            let resp = Request::get(&url).send().await?;
            let (ok, status, body) = read(resp).await?;
            read_activities(ok, status, &body)
        })
    }

    fn signup(&self, activity: &str, email: &str) -> Reply<String> {
        let url = self.signup_url(activity, email);
        Box::pin(async move {
            let resp = Request::post(&url).send().await?;
            let (ok, status, body) = read(resp).await?;
            read_signup(ok, status, &body)
        })
    }

    fn unregister(&self, activity: &str, email: &str) -> Reply<()> {
        let url = self.participant_url(activity, email);
        Box::pin(async move {
            let resp = Request::delete(&url).send().await?;
            let (ok, status, body) = read(resp).await?;
            read_removal(ok, status, &body)
        })
    }
}

async fn read(resp: Response) -> Result<(bool, u16, String), ApiError> {
    let ok = resp.ok();
    let status = resp.status();
    let body = resp.text().await?;
    Ok((ok, status, body))
}

/// Non-success status. A body that is not the expected error shape just
/// means there is no detail to show.
fn failure(status: u16, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorReply>(body)
        .ok()
        .and_then(|reply| reply.detail);
    ApiError::Status { status, detail }
}

pub fn read_activities(ok: bool, status: u16, body: &str) -> Result<Activities, ApiError> {
    if !ok {
        return Err(failure(status, body));
    }
    Ok(Activities::from_json(body)?)
}

/// A success status means the student is registered, even when the body
/// carries no readable message.
pub fn read_signup(ok: bool, status: u16, body: &str) -> Result<String, ApiError> {
    if !ok {
        return Err(failure(status, body));
    }
    Ok(serde_json::from_str::<SignupReply>(body)
        .map(|reply| reply.message)
        .unwrap_or_default())
}

/// The success body of a removal carries nothing the view needs.
pub fn read_removal(ok: bool, status: u16, body: &str) -> Result<(), ApiError> {
    if !ok {
        return Err(failure(status, body));
    }
    Ok(())
}
