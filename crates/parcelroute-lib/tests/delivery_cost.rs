mod common;

use parcelroute_lib::{
    calculate_delivery_cost, plan_route, quote_delivery, Error, Parcel, ParcelSize, ParcelType,
    PricingConfig, RouteRequest,
};

use common::fixture_graph;

#[test]
fn two_flight_cautious_parcel_costs_238() {
    let parcel = Parcel::parse("3", "B", "CautiousParcels").expect("valid parcel");
    let cost = calculate_delivery_cost(16.0, &parcel, &PricingConfig::default()).expect("priced");
    assert_eq!(cost, 238.0);
}

#[test]
fn quote_follows_the_planned_route() {
    let graph = fixture_graph();
    let plan = plan_route(&graph, &RouteRequest::new("Berlin", "Madrid")).expect("route");
    let parcel = Parcel::new(3.0, ParcelSize::B, ParcelType::CautiousParcels).expect("parcel");

    let quote = plan.quote(&parcel, &PricingConfig::default()).expect("quote");
    assert_eq!(quote.distance, 16.0);
    assert_eq!(quote.flights, 2.0);
    assert_eq!(quote.total, 238.0);
}

#[test]
fn heavy_weapons_in_large_crate() {
    let parcel = Parcel::new(5.0, ParcelSize::C, ParcelType::Weapons).expect("parcel");
    let quote = quote_delivery(8.0, &parcel, &PricingConfig::default()).expect("quote");
    assert_eq!(quote.subtotal, 120.0);
    assert_eq!(quote.total, 240.0);
}

#[test]
fn unrecognised_attributes_never_price_as_zero() {
    let error = Parcel::parse("3", "XL", "Weapons").expect_err("bad size");
    assert!(matches!(
        error,
        Error::InvalidParcelAttribute {
            attribute: "size",
            ..
        }
    ));

    let error = Parcel::parse("3", "A", "Livestock").expect_err("bad type");
    assert!(format!("{error}").contains("invalid parcel type"));
}

#[test]
fn quote_serialises_for_json_output() {
    let parcel = Parcel::new(0.5, ParcelSize::A, ParcelType::RefrigeratedGoods).expect("parcel");
    let quote = quote_delivery(8.0, &parcel, &PricingConfig::default()).expect("quote");
    let value = serde_json::to_value(quote).expect("serialises");
    assert_eq!(value["weight_surcharge"], 0.0);
    assert_eq!(value["size_surcharge"], 40.0);
    assert_eq!(value["flights"], 1.0);
}
