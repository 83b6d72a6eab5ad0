// aardvark-client/src/client/restaurant.rs
// Restaurant gateway - domain operations over REST

use std::collections::BTreeMap;

use axum::Router;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use shared::Menu;
use shared::client::{
    AvailabilityQuery, BillQuery, BillResponse, BookingRefQuery, BookingRequest, MenuEntry,
    OrderSubmission, SizesResponse, TablesResponse,
};
use shared::models::TimeSlot;

use super::http::{GatewayRequest, GatewayResponse, HttpClient, NetworkHttpClient};
use super::http_oneshot::OneshotHttpClient;
use crate::endpoint::Endpoint;
use crate::{ClientConfig, ClientError, ClientResult};

/// Gateway between the restaurant domain model and the restaurant server.
///
/// Holds no state besides its transport. Read operations that list things
/// (`request_menu`, `request_available_tables`, `request_available_sizes`)
/// return an empty result when the server answers with a non-success
/// status; their `try_` variants report [`ClientError::Status`] instead.
/// Write operations hand the server's response back unchanged.
#[derive(Debug, Clone)]
pub struct RestaurantClient<T = NetworkHttpClient> {
    transport: T,
}

impl RestaurantClient<NetworkHttpClient> {
    /// Network client for the configured server
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::with_transport(NetworkHttpClient::new(config)?))
    }
}

impl RestaurantClient<OneshotHttpClient> {
    /// Client for a server router running in this process
    pub fn in_process(router: Router) -> Self {
        Self::with_transport(OneshotHttpClient::new(router))
    }
}

impl<T: HttpClient> RestaurantClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    async fn send(&self, request: GatewayRequest) -> ClientResult<GatewayResponse> {
        tracing::debug!(method = %request.method, path = request.path, "Sending request");
        let response = self.transport.execute(request).await?;
        tracing::debug!(status = %response.status(), "Response received");
        Ok(response)
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: GatewayRequest) -> ClientResult<R> {
        self.send(request).await?.error_for_status()?.json()
    }

    // ========== Bookings ==========

    /// Booking reference for a customer name, as the raw response text.
    ///
    /// The body is returned whatever the status code.
    pub async fn fetch_booking_ref(&self, customer_name: &str) -> ClientResult<String> {
        let request = GatewayRequest::new(Endpoint::BookingRef)
            .with_query(&BookingRefQuery::by_name(customer_name))?;
        Ok(self.send(request).await?.text().to_string())
    }

    /// Send the details of a new booking
    pub async fn send_booking(&self, booking: &BookingRequest) -> ClientResult<GatewayResponse> {
        let request = GatewayRequest::new(Endpoint::SendBooking).with_json(booking)?;
        self.send(request).await
    }

    /// Tables free for a party of `size` at `date`/`time`
    pub async fn try_request_available_tables(
        &self,
        date: NaiveDate,
        time: TimeSlot,
        size: u32,
    ) -> ClientResult<Vec<u32>> {
        let query = AvailabilityQuery {
            date,
            time,
            size: Some(size),
        };
        let request = GatewayRequest::new(Endpoint::AvailableTables).with_query(&query)?;
        let response: TablesResponse = self.fetch_json(request).await?;
        Ok(response.tables)
    }

    /// Like [`Self::try_request_available_tables`], empty on a non-success status
    pub async fn request_available_tables(
        &self,
        date: NaiveDate,
        time: TimeSlot,
        size: u32,
    ) -> ClientResult<Vec<u32>> {
        or_empty(
            Endpoint::AvailableTables,
            self.try_request_available_tables(date, time, size).await,
        )
    }

    /// Party sizes that can still be booked at `date`/`time`
    pub async fn try_request_available_sizes(
        &self,
        date: NaiveDate,
        time: TimeSlot,
    ) -> ClientResult<Vec<u32>> {
        let query = AvailabilityQuery {
            date,
            time,
            size: None,
        };
        let request = GatewayRequest::new(Endpoint::AvailableSizes).with_query(&query)?;
        let response: SizesResponse = self.fetch_json(request).await?;
        Ok(response.sizes)
    }

    /// Like [`Self::try_request_available_sizes`], empty on a non-success status
    pub async fn request_available_sizes(
        &self,
        date: NaiveDate,
        time: TimeSlot,
    ) -> ClientResult<Vec<u32>> {
        or_empty(
            Endpoint::AvailableSizes,
            self.try_request_available_sizes(date, time).await,
        )
    }

    // ========== Menu ==========

    /// The server's menu. Every item is validated as it is parsed.
    pub async fn try_request_menu(&self) -> ClientResult<Menu> {
        let entries: Vec<MenuEntry> = self.fetch_json(GatewayRequest::new(Endpoint::Menu)).await?;
        Ok(Menu::from_entries(entries)?)
    }

    /// Like [`Self::try_request_menu`], an empty menu on a non-success status
    pub async fn request_menu(&self) -> ClientResult<Menu> {
        or_empty(Endpoint::Menu, self.try_request_menu().await)
    }

    /// Replace the server's menu
    pub async fn send_menu(&self, menu: &Menu) -> ClientResult<GatewayResponse> {
        let request = GatewayRequest::new(Endpoint::SendMenu).with_json(&menu.to_entries())?;
        self.send(request).await
    }

    // ========== Tables and orders ==========

    /// Submit an order: food name to quantity, sent in name order
    pub async fn submit_order(
        &self,
        items: &BTreeMap<String, u32>,
        table: u32,
    ) -> ClientResult<GatewayResponse> {
        let request = GatewayRequest::new(Endpoint::SubmitOrder)
            .with_json(&OrderSubmission::new(items, table))?;
        self.send(request).await
    }

    /// Every table number in the restaurant
    pub async fn request_total_tables(&self) -> ClientResult<Vec<u32>> {
        let response: TablesResponse = self
            .fetch_json(GatewayRequest::new(Endpoint::TotalTables))
            .await?;
        Ok(response.tables)
    }

    /// The server's running bill for a table
    pub async fn request_total_bill(&self, table: u32) -> ClientResult<f64> {
        let request = GatewayRequest::new(Endpoint::TotalBill).with_query(&BillQuery { table })?;
        let response: BillResponse = self.fetch_json(request).await?;
        Ok(response.bill)
    }
}

/// Swallow a non-success status into an empty value. Other errors pass.
fn or_empty<V: Default>(endpoint: Endpoint, result: ClientResult<V>) -> ClientResult<V> {
    match result {
        Err(ClientError::Status { status, .. }) => {
            tracing::warn!(path = endpoint.path(), %status, "Server request failed, returning empty result");
            Ok(V::default())
        }
        other => other,
    }
}
