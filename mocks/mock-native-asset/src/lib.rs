#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod mock_native_asset;

pub use crate::mock_native_asset::{
    MockNativeAsset, MockNativeAssetClient, MockNativeAssetDataKey, MockNativeAssetError,
};
