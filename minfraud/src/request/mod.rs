//! Request value objects and their builders.
//!
//! Each sub-object is built independently and attached to the aggregate
//! [`MinFraudRequest`]. Builders validate in `build()` and return a
//! [`ValidationError`] naming the offending wire field, so a request that
//! builds successfully is ready to serialize and send.
//!
//! # Modules
//!
//! - [`account`] — Account of the user placing the transaction
//! - [`credit_card`] — Card attributes (never the full card number)
//! - [`device`] — Device and IP address the transaction came from
//! - [`email`] — Email address
//! - [`event`] — Transaction event type, identifiers, and time
//! - [`location`] — Billing and shipping addresses
//! - [`order`] — Order totals and referrer
//! - [`payment`] — Processor outcome
//! - [`shopping_cart`] — Cart line items

pub mod account;
pub mod credit_card;
pub mod device;
pub mod email;
pub mod event;
pub mod location;
pub mod order;
pub mod payment;
pub mod shopping_cart;

pub(crate) mod validate;

pub use account::Account;
pub use credit_card::CreditCard;
pub use device::Device;
pub use email::Email;
pub use event::{Event, EventType};
pub use location::{Billing, DeliverySpeed, Shipping};
pub use order::Order;
pub use payment::{Payment, Processor};
pub use shopping_cart::ShoppingCartItem;

use serde::Serialize;

use crate::error::ValidationError;

/// The aggregate request sent to the Score and Insights endpoints.
///
/// A tree of independent value objects with no back-references. The
/// `device` and `event` sub-objects are mandatory; everything else is
/// optional and omitted from the outgoing JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinFraudRequest {
    /// The device the transaction was made from. Required.
    pub device: Device,

    /// The event being scored. Required.
    pub event: Event,

    /// The account the user transacted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Account>,

    /// The user's email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,

    /// The billing address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<Billing>,

    /// The shipping address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,

    /// Payment processing details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,

    /// Card attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_card: Option<CreditCard>,

    /// Order details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,

    /// Cart line items, omitted entirely when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shopping_cart: Vec<ShoppingCartItem>,
}

impl MinFraudRequest {
    /// Returns a builder with no sub-objects set.
    #[must_use]
    pub fn builder() -> MinFraudRequestBuilder {
        MinFraudRequestBuilder::default()
    }
}

/// Builder for [`MinFraudRequest`].
#[derive(Debug, Clone, Default)]
pub struct MinFraudRequestBuilder {
    device: Option<Device>,
    event: Option<Event>,
    account: Option<Account>,
    email: Option<Email>,
    billing: Option<Billing>,
    shipping: Option<Shipping>,
    payment: Option<Payment>,
    credit_card: Option<CreditCard>,
    order: Option<Order>,
    shopping_cart: Vec<ShoppingCartItem>,
}

impl MinFraudRequestBuilder {
    /// Sets the device sub-object. Required.
    #[must_use]
    pub fn device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    /// Sets the event sub-object. Required.
    #[must_use]
    pub fn event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    /// Sets the account sub-object.
    #[must_use]
    pub fn account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    /// Sets the email sub-object.
    #[must_use]
    pub fn email(mut self, email: Email) -> Self {
        self.email = Some(email);
        self
    }

    /// Sets the billing address.
    #[must_use]
    pub fn billing(mut self, billing: Billing) -> Self {
        self.billing = Some(billing);
        self
    }

    /// Sets the shipping address.
    #[must_use]
    pub fn shipping(mut self, shipping: Shipping) -> Self {
        self.shipping = Some(shipping);
        self
    }

    /// Sets the payment sub-object.
    #[must_use]
    pub fn payment(mut self, payment: Payment) -> Self {
        self.payment = Some(payment);
        self
    }

    /// Sets the credit card sub-object.
    #[must_use]
    pub fn credit_card(mut self, credit_card: CreditCard) -> Self {
        self.credit_card = Some(credit_card);
        self
    }

    /// Sets the order sub-object.
    #[must_use]
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    /// Appends one item to the shopping cart.
    #[must_use]
    pub fn add_shopping_cart_item(mut self, item: ShoppingCartItem) -> Self {
        self.shopping_cart.push(item);
        self
    }

    /// Builds the [`MinFraudRequest`].
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the device or event sub-object is
    /// missing.
    pub fn build(self) -> Result<MinFraudRequest, ValidationError> {
        let device = self
            .device
            .ok_or_else(|| ValidationError::new("device", "a device is required"))?;
        let event = self
            .event
            .ok_or_else(|| ValidationError::new("event", "an event is required"))?;

        Ok(MinFraudRequest {
            device,
            event,
            account: self.account,
            email: self.email,
            billing: self.billing,
            shipping: self.shipping,
            payment: self.payment,
            credit_card: self.credit_card,
            order: self.order,
            shopping_cart: self.shopping_cart,
        })
    }
}

#[cfg(test)]
mod tests {
    use md5::{Digest, Md5};
    use serde_json::json;

    use super::*;

    fn minimal_request() -> MinFraudRequest {
        MinFraudRequest::builder()
            .device(
                Device::builder()
                    .ip_address("81.2.69.160".parse().expect("valid IP"))
                    .build()
                    .expect("valid device"),
            )
            .event(Event::builder().transaction_id("t12").build())
            .build()
            .expect("valid request")
    }

    fn full_request() -> MinFraudRequest {
        MinFraudRequest::builder()
            .event(
                Event::builder()
                    .transaction_id("txn3134133")
                    .shop_id("s2123")
                    .time("2012-04-12T23:20:50Z".parse().expect("valid time"))
                    .event_type(EventType::Purchase)
                    .build(),
            )
            .account(Account::builder().user_id("3132").username("fred").build())
            .email(
                Email::builder()
                    .address("test@maxmind.com")
                    .domain("maxmind.com")
                    .build()
                    .expect("valid email"),
            )
            .billing(
                Billing::builder()
                    .first_name("First")
                    .last_name("Last")
                    .company("Company")
                    .address("101 Address Rd.")
                    .address_2("Unit 5")
                    .city("City of Thorns")
                    .region("CT")
                    .country("US")
                    .postal("06510")
                    .phone_number("323-123-4321")
                    .phone_country_code("1")
                    .build()
                    .expect("valid billing"),
            )
            .shipping(
                Shipping::builder()
                    .first_name("ShipFirst")
                    .last_name("ShipLast")
                    .company("ShipCo")
                    .address("322 Ship Addr. Ln.")
                    .address_2("St. 43")
                    .city("Nowhere")
                    .region("OK")
                    .country("US")
                    .postal("73003")
                    .phone_number("403-321-2323")
                    .phone_country_code("1")
                    .delivery_speed(DeliverySpeed::SameDay)
                    .build()
                    .expect("valid shipping"),
            )
            .payment(
                Payment::builder()
                    .processor(Processor::Stripe)
                    .was_authorized(false)
                    .decline_code("invalid number")
                    .build(),
            )
            .credit_card(
                CreditCard::builder()
                    .issuer_id_number("323132")
                    .bank_name("Bank of No Hope")
                    .bank_phone_country_code("1")
                    .bank_phone_number("800-342-1232")
                    .avs_result('Y')
                    .cvv_result('N')
                    .last_4_digits("7643")
                    .build()
                    .expect("valid card"),
            )
            .order(
                Order::builder()
                    .amount("323.21".parse().expect("valid decimal"))
                    .currency("USD")
                    .discount_code("FIRST")
                    .affiliate_id("af12")
                    .subaffiliate_id("saf42")
                    .referrer_uri("http://www.amazon.com/".parse().expect("valid URL"))
                    .build()
                    .expect("valid order"),
            )
            .add_shopping_cart_item(
                ShoppingCartItem::builder()
                    .category("pets")
                    .item_id("ad23232")
                    .quantity(2)
                    .price("20.43".parse().expect("valid decimal"))
                    .build()
                    .expect("valid item"),
            )
            .add_shopping_cart_item(
                ShoppingCartItem::builder()
                    .category("beauty")
                    .item_id("bst112")
                    .quantity(1)
                    .price("100".parse().expect("valid decimal"))
                    .build()
                    .expect("valid item"),
            )
            .device(
                Device::builder()
                    .ip_address("81.2.69.160".parse().expect("valid IP"))
                    .user_agent(
                        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/41.0.2272.89 Safari/537.36",
                    )
                    .accept_language("en-US,en;q=0.8")
                    .build()
                    .expect("valid device"),
            )
            .build()
            .expect("valid request")
    }

    #[test]
    fn device_is_required() {
        let err = MinFraudRequest::builder()
            .event(Event::builder().build())
            .build()
            .expect_err("missing device must be rejected");
        assert_eq!(err.field, "device");
    }

    #[test]
    fn event_is_required() {
        let device = Device::builder()
            .ip_address("81.2.69.160".parse().expect("valid IP"))
            .build()
            .expect("valid device");
        let err = MinFraudRequest::builder()
            .device(device)
            .build()
            .expect_err("missing event must be rejected");
        assert_eq!(err.field, "event");
    }

    #[test]
    fn minimal_request_serializes_without_optional_keys() {
        let value = serde_json::to_value(minimal_request()).expect("serializable");
        assert_eq!(
            value,
            json!({
                "device": { "ip_address": "81.2.69.160" },
                "event": { "transaction_id": "t12" }
            })
        );
    }

    #[test]
    fn full_request_matches_reference_fixture() {
        let username_md5 = hex::encode(Md5::digest(b"fred"));
        let value = serde_json::to_value(full_request()).expect("serializable");
        assert_eq!(
            value,
            json!({
                "device": {
                    "ip_address": "81.2.69.160",
                    "user_agent": "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                                   (KHTML, like Gecko) Chrome/41.0.2272.89 Safari/537.36",
                    "accept_language": "en-US,en;q=0.8"
                },
                "event": {
                    "transaction_id": "txn3134133",
                    "shop_id": "s2123",
                    "time": "2012-04-12T23:20:50Z",
                    "type": "purchase"
                },
                "account": {
                    "user_id": "3132",
                    "username_md5": username_md5
                },
                "email": {
                    "address": "test@maxmind.com",
                    "domain": "maxmind.com"
                },
                "billing": {
                    "first_name": "First",
                    "last_name": "Last",
                    "company": "Company",
                    "address": "101 Address Rd.",
                    "address_2": "Unit 5",
                    "city": "City of Thorns",
                    "region": "CT",
                    "country": "US",
                    "postal": "06510",
                    "phone_number": "323-123-4321",
                    "phone_country_code": "1"
                },
                "shipping": {
                    "first_name": "ShipFirst",
                    "last_name": "ShipLast",
                    "company": "ShipCo",
                    "address": "322 Ship Addr. Ln.",
                    "address_2": "St. 43",
                    "city": "Nowhere",
                    "region": "OK",
                    "country": "US",
                    "postal": "73003",
                    "phone_number": "403-321-2323",
                    "phone_country_code": "1",
                    "delivery_speed": "same_day"
                },
                "payment": {
                    "processor": "stripe",
                    "was_authorized": false,
                    "decline_code": "invalid number"
                },
                "credit_card": {
                    "issuer_id_number": "323132",
                    "last_4_digits": "7643",
                    "bank_name": "Bank of No Hope",
                    "bank_phone_country_code": "1",
                    "bank_phone_number": "800-342-1232",
                    "avs_result": "Y",
                    "cvv_result": "N"
                },
                "order": {
                    "amount": 323.21,
                    "currency": "USD",
                    "discount_code": "FIRST",
                    "affiliate_id": "af12",
                    "subaffiliate_id": "saf42",
                    "referrer_uri": "http://www.amazon.com/"
                },
                "shopping_cart": [
                    {
                        "category": "pets",
                        "item_id": "ad23232",
                        "quantity": 2,
                        "price": 20.43
                    },
                    {
                        "category": "beauty",
                        "item_id": "bst112",
                        "quantity": 1,
                        "price": 100.0
                    }
                ]
            })
        );
    }
}
