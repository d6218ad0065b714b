use crate::http::Error;

use serde::{de::DeserializeOwned, Deserialize};

pub enum Response<T> {
    Success(Inner<T>),
    Error(Error),
}

pub struct Inner<T> {
    pub payload: T,
    pub status: u16,
}

impl<T> Response<T> {
    pub fn collect(self) -> Result<T, Error> {
        match self {
            Response::Success(response) => Ok(response.payload),
            Response::Error(err) => Err(err),
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn error_message(status: reqwest::StatusCode, text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
        return body.message;
    }

    if !text.trim().is_empty() {
        return text.trim().to_owned();
    }

    status
        .canonical_reason()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}

pub trait AsyncFrom<T>: Sized {
    async fn async_from(value: T) -> Self;
}

impl<T> AsyncFrom<reqwest::Response> for Response<T>
where
    T: DeserializeOwned,
{
    async fn async_from(value: reqwest::Response) -> Self {
        let status = value.status();

        let text = match value.text().await {
            Ok(text) => text,
            Err(cause) => return Response::Error(Error::ReadResponseTextError { cause }),
        };

        if !status.is_success() {
            return Response::Error(Error::GenericResponseError {
                message: error_message(status, &text),
            });
        }

        match serde_json::from_str::<T>(&text) {
            Ok(payload) => Response::Success(Inner {
                payload,
                status: status.as_u16(),
            }),
            Err(cause) => Response::Error(Error::ParseResponseError { cause }),
        }
    }
}
