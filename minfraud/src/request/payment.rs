//! Payment processing information.

use serde::Serialize;

/// Payment processors recognized by the service, serialized as their
/// snake_case wire identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Processor {
    Adyen,
    Altapay,
    AmazonPayments,
    Authorizenet,
    Balanced,
    Beanstream,
    Bluepay,
    Braintree,
    ChasePaymentech,
    Cielo,
    Collector,
    Compropago,
    Conekta,
    Cuentadigital,
    Dibs,
    DigitalRiver,
    Elavon,
    Epayeu,
    EprocessingNetwork,
    Eway,
    FirstData,
    GlobalPayments,
    Ingenico,
    Internetsecure,
    IntuitQuickbooksPayments,
    Iugu,
    MastercardPaymentGateway,
    Moneris,
    Nmi,
    Openpaymx,
    OptimalPayments,
    Payfast,
    Paygate,
    Payone,
    Paypal,
    Paystation,
    Paytrace,
    Paytrail,
    Payture,
    Payu,
    Payulatam,
    PrincetonPaymentSolutions,
    Psigate,
    Qiwi,
    Raberil,
    Rede,
    Redpagos,
    Rewardspay,
    Sagepay,
    SimplifyCommerce,
    Skrill,
    Smartcoin,
    SpsDecidir,
    Stripe,
    Telerecargas,
    Towah,
    UsaEpay,
    Vindicia,
    VirtualCardServices,
    Vme,
    Worldpay,
    Other,
}

/// Payment processing details for the transaction.
///
/// # JSON Format
///
/// ```json
/// {
///   "processor": "stripe",
///   "was_authorized": false,
///   "decline_code": "invalid number"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    /// The processor used for the transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<Processor>,

    /// Whether the payment was authorized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub was_authorized: Option<bool>,

    /// The decline code reported by the processor, if the payment declined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline_code: Option<String>,
}

impl Payment {
    /// Returns a builder with no fields set.
    #[must_use]
    pub fn builder() -> PaymentBuilder {
        PaymentBuilder::default()
    }
}

/// Builder for [`Payment`].
#[derive(Debug, Clone, Default)]
pub struct PaymentBuilder {
    processor: Option<Processor>,
    was_authorized: Option<bool>,
    decline_code: Option<String>,
}

impl PaymentBuilder {
    /// Sets the payment processor.
    #[must_use]
    pub const fn processor(mut self, processor: Processor) -> Self {
        self.processor = Some(processor);
        self
    }

    /// Sets whether the payment was authorized.
    #[must_use]
    pub const fn was_authorized(mut self, was_authorized: bool) -> Self {
        self.was_authorized = Some(was_authorized);
        self
    }

    /// Sets the processor decline code.
    #[must_use]
    pub fn decline_code(mut self, decline_code: impl Into<String>) -> Self {
        self.decline_code = Some(decline_code.into());
        self
    }

    /// Builds the [`Payment`]. All fields are optional; this cannot fail.
    #[must_use]
    pub fn build(self) -> Payment {
        Payment {
            processor: self.processor,
            was_authorized: self.was_authorized,
            decline_code: self.decline_code,
        }
    }
}
