use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// A single name/value metadata pair. Order within a tag set is significant:
/// indexers read tags both by name and positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Tag names fixed by the external asset tagging specification.
pub mod names {
    pub const CONTENT_TYPE: &str = "Content-Type";
    pub const TYPE: &str = "Type";
    pub const TITLE: &str = "Title";
    pub const DESCRIPTION: &str = "Description";
    pub const TOPIC: &str = "Topic";

    pub const LICENSE: &str = "License";
    pub const ACCESS: &str = "Access";
    pub const ACCESS_FEE: &str = "Access-Fee";
    pub const DERIVATION: &str = "Derivation";
    pub const COMMERCIAL_USE: &str = "Commercial-Use";
    pub const LICENSE_FEE: &str = "License-Fee";
    pub const CURRENCY: &str = "Currency";
    pub const EXPIRES: &str = "Expires";
    pub const PAYMENT_ADDRESS: &str = "Payment-Address";
    pub const PAYMENT_MODE: &str = "Payment-Mode";

    pub const APP_NAME: &str = "App-Name";
    pub const APP_VERSION: &str = "App-Version";
    pub const CONTRACT_SRC: &str = "Contract-Src";
    pub const CONTRACT_MANIFEST: &str = "Contract-Manifest";
    pub const INIT_STATE: &str = "Init-State";
    pub const INDEXED_BY: &str = "Indexed-By";

    pub const DATA_PROTOCOL: &str = "Data-Protocol";
    pub const NAME: &str = "Name";
    pub const COLLECTION_TYPE: &str = "Collection-Type";
    pub const THUMBNAIL: &str = "Thumbnail";
    pub const BANNER: &str = "Banner";
    pub const COLLECTION_CODE: &str = "Collection-Code";
}

/// The closed set of recognized asset kinds. Anything outside this set is
/// rejected at the builder boundary: assets are immutable once written, so
/// an unindexable `Type` tag can never be corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Meme,
    Image,
    Video,
    Podcast,
    BlogPost,
    SocialPost,
    Music,
    Audio,
    Token,
    WebPage,
    Profile,
    Contract,
    Presentation,
    Document,
    Collection,
    App,
    Other,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Meme => "meme",
            AssetType::Image => "image",
            AssetType::Video => "video",
            AssetType::Podcast => "podcast",
            AssetType::BlogPost => "blog-post",
            AssetType::SocialPost => "social-post",
            AssetType::Music => "music",
            AssetType::Audio => "audio",
            AssetType::Token => "token",
            AssetType::WebPage => "web-page",
            AssetType::Profile => "profile",
            AssetType::Contract => "contract",
            AssetType::Presentation => "presentation",
            AssetType::Document => "document",
            AssetType::Collection => "collection",
            AssetType::App => "app",
            AssetType::Other => "other",
        }
    }
}

impl Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssetType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meme" => Ok(AssetType::Meme),
            "image" => Ok(AssetType::Image),
            "video" => Ok(AssetType::Video),
            "podcast" => Ok(AssetType::Podcast),
            "blog-post" => Ok(AssetType::BlogPost),
            "social-post" => Ok(AssetType::SocialPost),
            "music" => Ok(AssetType::Music),
            "audio" => Ok(AssetType::Audio),
            "token" => Ok(AssetType::Token),
            "web-page" => Ok(AssetType::WebPage),
            "profile" => Ok(AssetType::Profile),
            "contract" => Ok(AssetType::Contract),
            "presentation" => Ok(AssetType::Presentation),
            "document" => Ok(AssetType::Document),
            "collection" => Ok(AssetType::Collection),
            "app" => Ok(AssetType::App),
            "other" => Ok(AssetType::Other),
            other => Err(ValidationError::UnknownAssetType(other.to_string())),
        }
    }
}

impl Serialize for AssetType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssetType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
