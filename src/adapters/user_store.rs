use crate::adapters::codec::{
    decode_reply, encode_call, read_result, write_i16_field, write_string_field,
};
use crate::adapters::http::THttpTransport;
use crate::domain::model::AuthToken;
use crate::domain::ports::UserStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use thrift::protocol::TType;

/// EDAM protocol version this client was written against.
pub const EDAM_VERSION_MAJOR: i16 = 1;
pub const EDAM_VERSION_MINOR: i16 = 28;

pub const USER_STORE_PATH: &str = "/edam/user";

pub fn user_store_url(host: &str) -> String {
    format!("https://{}{}", host, USER_STORE_PATH)
}

pub struct UserStoreClient {
    transport: THttpTransport,
}

impl UserStoreClient {
    pub fn new(transport: THttpTransport) -> Self {
        Self { transport }
    }

    pub fn connect(url: &str) -> Result<Self> {
        Ok(Self::new(THttpTransport::open(url)?))
    }
}

#[async_trait]
impl UserStore for UserStoreClient {
    async fn check_version(&self, client_name: &str, major: i16, minor: i16) -> Result<bool> {
        const METHOD: &str = "checkVersion";
        let sequence = self.transport.next_sequence();
        let request = encode_call(METHOD, sequence, |o| {
            write_string_field(o, "clientName", 1, client_name)?;
            write_i16_field(o, "edamVersionMajor", 2, major)?;
            write_i16_field(o, "edamVersionMinor", 3, minor)
        })?;

        let reply = self.transport.round_trip(request).await?;
        decode_reply(&reply, METHOD, sequence, |i| {
            read_result(i, METHOD, TType::Bool, |i| Ok(i.read_bool()?))
        })
    }

    async fn get_note_store_url(&self, token: &AuthToken) -> Result<String> {
        const METHOD: &str = "getNoteStoreUrl";
        let sequence = self.transport.next_sequence();
        let request = encode_call(METHOD, sequence, |o| {
            write_string_field(o, "authenticationToken", 1, token.as_str())
        })?;

        let reply = self.transport.round_trip(request).await?;
        decode_reply(&reply, METHOD, sequence, |i| {
            read_result(i, METHOD, TType::String, |i| Ok(i.read_string()?))
        })
    }

    fn close(self) {
        self.transport.close();
    }
}
