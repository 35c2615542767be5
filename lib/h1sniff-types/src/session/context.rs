/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use super::SessionContent;

/// Per connection context, passed down the processing chain of a single connection.
///
/// The attribute content is created lazily by the first component that writes to it,
/// and stays attached to this context for the lifetime of the connection.
#[derive(Debug, Default)]
pub struct SessionContext {
    content: Option<SessionContent>,
}

impl SessionContext {
    pub fn new() -> Self {
        SessionContext::default()
    }

    pub fn with_content(content: SessionContent) -> Self {
        SessionContext {
            content: Some(content),
        }
    }

    #[inline]
    pub fn content(&self) -> Option<&SessionContent> {
        self.content.as_ref()
    }

    #[inline]
    pub fn content_mut(&mut self) -> Option<&mut SessionContent> {
        self.content.as_mut()
    }

    pub fn get_or_insert_content(&mut self) -> &mut SessionContent {
        self.content.get_or_insert_with(SessionContent::default)
    }

    pub fn take_content(&mut self) -> Option<SessionContent> {
        self.content.take()
    }
}
