//! Inspect a hex-encoded signing request.
//!
//! ```text
//! cargo run --example decode_tx -- b5e97db07fa0bd0e...
//! ```

use aptos_bcs::{
    decode_with_status, requires_blind_signing, DecodeOptions, Payload, Transaction,
};

fn main() {
    let input = std::env::args()
        .nth(1)
        .expect("usage: decode_tx <hex-encoded transaction>");
    let bytes = hex::decode(input.trim().trim_start_matches("0x")).expect("Invalid hex input");
    println!("Input size: {} bytes", bytes.len());

    let (status, tx) = decode_with_status(&bytes, &DecodeOptions::default());
    println!("Status: {:?} ({})", status, status.code());
    let Some(tx) = tx else {
        return;
    };

    println!("\n=== {:?} ===", tx.variant());
    match &tx {
        Transaction::Raw(raw) => {
            println!("Sender:     {}", raw.sender);
            println!("Sequence:   {}", raw.sequence_number);
            let footer = raw.footer();
            println!("Max gas:    {}", footer.max_gas_amount);
            println!("Gas price:  {}", footer.gas_unit_price);
            match raw.max_gas_fee() {
                Some(fee) => println!("Max fee:    {}", fee),
                None => println!("Max fee:    overflow"),
            }
            println!("Expiration: {}", footer.expiration_timestamp_secs);
            println!("Chain ID:   {}", footer.chain_id);

            match &raw.payload {
                Payload::Script { body } => println!("\nScript ({} bytes)", body.len()),
                Payload::Multisig { body } => println!("\nMultisig ({} bytes)", body.len()),
                Payload::EntryFunction(f) => {
                    println!("\nFunction:   {}", f);
                    println!("Classified: {:?}", f.known_function());
                    if let Some(coin_type) = f.call.coin_type() {
                        println!("Coin type:  {}", coin_type);
                    }
                    if let Some(receiver) = f.call.receiver() {
                        println!("Receiver:   {}", receiver);
                    }
                    if let Some(amount) = f.call.amount() {
                        println!("Amount:     {}", amount);
                    }
                }
            }
        }
        Transaction::RawWithData { body } => println!("Body: {} bytes", body.len()),
        Transaction::PlainMessage(text) => {
            println!("Text: {}", String::from_utf8_lossy(text));
        }
        Transaction::RawBytesMessage(data) => println!("Bytes: {}", hex::encode(data)),
    }

    println!("\nBlind signing required: {}", requires_blind_signing(&tx));
}
