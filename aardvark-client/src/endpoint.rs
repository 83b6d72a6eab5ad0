//! Fixed map from gateway operation to HTTP method and path

use http::Method;

/// Server endpoint used by one gateway operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Booking reference lookup (`GET /table`)
    BookingRef,
    /// Full menu (`GET /menu/get`)
    Menu,
    /// Replace the menu (`POST /menu/update`)
    SendMenu,
    /// Create a booking (`POST /booking/update`)
    SendBooking,
    /// Submit a table's order (`POST /order/submit`)
    SubmitOrder,
    /// Tables free for a date/time/size (`GET /booking/tables`)
    AvailableTables,
    /// Party sizes bookable for a date/time (`GET /booking/sizes`)
    AvailableSizes,
    /// Every table in the restaurant (`GET /table/total`)
    TotalTables,
    /// A table's bill (`GET /order/bill`)
    TotalBill,
}

impl Endpoint {
    pub const ALL: [Endpoint; 9] = [
        Endpoint::BookingRef,
        Endpoint::Menu,
        Endpoint::SendMenu,
        Endpoint::SendBooking,
        Endpoint::SubmitOrder,
        Endpoint::AvailableTables,
        Endpoint::AvailableSizes,
        Endpoint::TotalTables,
        Endpoint::TotalBill,
    ];

    pub fn method(&self) -> Method {
        match self {
            Endpoint::SendMenu | Endpoint::SendBooking | Endpoint::SubmitOrder => Method::POST,
            _ => Method::GET,
        }
    }

    pub const fn path(&self) -> &'static str {
        match self {
            Endpoint::BookingRef => "/table",
            Endpoint::Menu => "/menu/get",
            Endpoint::SendMenu => "/menu/update",
            Endpoint::SendBooking => "/booking/update",
            Endpoint::SubmitOrder => "/order/submit",
            Endpoint::AvailableTables => "/booking/tables",
            Endpoint::AvailableSizes => "/booking/sizes",
            Endpoint::TotalTables => "/table/total",
            Endpoint::TotalBill => "/order/bill",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<&str> = Endpoint::ALL.iter().map(Endpoint::path).collect();
        assert_eq!(paths.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_write_operations_post() {
        assert_eq!(Endpoint::SubmitOrder.method(), Method::POST);
        assert_eq!(Endpoint::SendBooking.method(), Method::POST);
        assert_eq!(Endpoint::Menu.method(), Method::GET);
        assert_eq!(Endpoint::TotalBill.path(), "/order/bill");
    }
}
