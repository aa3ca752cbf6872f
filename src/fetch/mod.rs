//! Page fetching module
//!
//! One HTTP GET per page, with status codes mapped to typed errors:
//!
//! | Outcome            | Result                      |
//! |--------------------|-----------------------------|
//! | no response        | `Error::Client`             |
//! | 200                | decoded `Page` or `Decode`  |
//! | 400                | `Error::BadRequest`         |
//! | 401                | `Error::Unauthorized`       |
//! | anything else      | `Error::UnexpectedStatus`   |

mod fetcher;

pub use fetcher::{
    decode_page, PageFetcher, API_ENDPOINT_HOST, API_ENDPOINT_PATH, API_ENDPOINT_SCHEME,
    DEFAULT_ENDPOINT,
};
