/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;

use bytes::{BufMut, BytesMut};
use log::trace;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

use h1sniff_types::session::SessionContext;

use crate::{HttpSniffConfig, SniffError, SniffResult, http_head_complete, sniff_http};

#[derive(Debug, Error)]
pub enum SniffStreamError {
    #[error("closed by client")]
    ClosedByClient,
    #[error("read failed: {0:?}")]
    ReadFailed(io::Error),
    #[error("timeout to wait initial data")]
    WaitTimeout,
    #[error("timeout to read more data")]
    ReadTimeout,
    #[error("sniff failed: {0}")]
    Sniff(#[from] SniffError),
}

async fn read_more<R>(
    reader: &mut R,
    buf: &mut BytesMut,
    max_size: usize,
) -> Result<(), SniffStreamError>
where
    R: AsyncRead + Unpin,
{
    let left = max_size.saturating_sub(buf.len());
    let mut limited = BufMut::limit(&mut *buf, left);
    match reader.read_buf(&mut limited).await {
        Ok(0) => Err(SniffStreamError::ClosedByClient),
        Ok(_) => Ok(()),
        Err(e) => Err(SniffStreamError::ReadFailed(e)),
    }
}

async fn sniff_buffered<R>(
    reader: &mut R,
    buf: &mut BytesMut,
    max_size: usize,
    ctx: &mut SessionContext,
) -> Result<SniffResult, SniffStreamError>
where
    R: AsyncRead + Unpin,
{
    loop {
        match sniff_http(ctx, &buf[..]) {
            Ok(r) => return Ok(r),
            Err(SniffError::NoHostHeader) if http_head_complete(&buf[..]) => {
                return Err(SniffError::NoHostHeader.into());
            }
            Err(e) if e.is_no_clue() => {
                if buf.len() >= max_size {
                    return Err(SniffStreamError::Sniff(e));
                }
                trace!("{e} after {} bytes, will read more", buf.len());
                read_more(reader, buf, max_size).await?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

/// Read from the stream until the http request head can be sniffed.
///
/// All data read is kept in `buf`, and should be sent to the upstream before the rest
/// of the stream. Data already in `buf` is sniffed first.
pub async fn sniff_stream<R>(
    reader: &mut R,
    buf: &mut BytesMut,
    config: &HttpSniffConfig,
    ctx: &mut SessionContext,
) -> Result<SniffResult, SniffStreamError>
where
    R: AsyncRead + Unpin,
{
    let max_size = config.data0_buffer_size();

    if buf.is_empty() && max_size > 0 {
        tokio::time::timeout(
            config.data0_wait_timeout(),
            read_more(reader, buf, max_size),
        )
        .await
        .map_err(|_| SniffStreamError::WaitTimeout)??;
    }

    tokio::time::timeout(
        config.data0_read_timeout(),
        sniff_buffered(reader, buf, max_size, ctx),
    )
    .await
    .map_err(|_| SniffStreamError::ReadTimeout)?
}
