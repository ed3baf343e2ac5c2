use curval::codec::base58;
use curval::codec::base58::Base58Error;
use curval::curve::{curve_by_id, CurveId};
use curval::hash::{dsha256, hash160, sha256};
use curval::keys::{address, Network, PrivateKey, PublicKey};

use hex_literal::hex;

const PRIV_HEX: &str = "29EE955FEDA1A85F87ED4004958479706BA6C71FC99A67697A9A13D9D08C618E";

#[test]
fn base58_known_values() {
    assert_eq!(base58::encode(b""), "");
    assert_eq!(base58::encode(&[0]), "1");
    assert_eq!(base58::encode(&[0, 0, 1]), "112");
    assert_eq!(base58::encode(b"hello"), "Cn8eVZg");
}

#[test]
fn base58_round_trips() {
    for bytes in [
        &b""[..],
        &[0u8][..],
        &[0, 0, 0, 42][..],
        &hex!("00010966776006953D5567439E5E39F86A0D273BEE")[..],
        &[0xFF; 40][..],
    ] {
        let encoded = base58::encode(bytes);
        assert_eq!(base58::decode(&encoded).unwrap(), bytes, "{encoded}");
    }
}

#[test]
fn base58_rejects_foreign_characters() {
    assert!(matches!(
        base58::decode("0OIl"),
        Err(Base58Error::InvalidCharacter)
    ));
    assert!(matches!(
        base58::decode("abc def"),
        Err(Base58Error::InvalidCharacter)
    ));
}

#[test]
fn base58check_round_trip_and_checksum() {
    let payload = hex!("00010966776006953D5567439E5E39F86A0D273BEE");

    let encoded = base58::check_encode(&payload);
    assert_eq!(encoded, "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM");
    assert_eq!(base58::check_decode(&encoded).unwrap(), payload);

    let mut corrupted = encoded;
    corrupted.replace_range(1..2, "7");
    assert!(matches!(
        base58::check_decode(&corrupted),
        Err(Base58Error::InvalidChecksum)
    ));
}

#[test]
fn hash_compositions() {
    // FIPS 180-4 vector for the underlying digest.
    assert_eq!(
        sha256(b"abc"),
        hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );

    assert_eq!(dsha256(b"abc"), sha256(&sha256(b"abc")));

    // HASH160 of the textbook uncompressed public key.
    let pubkey = hex!(
        "0450863AD64A87AE8A2FE83C1AF1A8403CB53F53E486D8511DAD8A04887E5B2352"
        "2CD470243453A299FA9E77237716103ABC11A1DF38855ED6F2EE187E9C582BA6"
    );
    assert_eq!(
        hash160(&pubkey),
        hex!("010966776006953D5567439E5E39F86A0D273BEE")
    );
}

#[test]
fn p2pkh_address_of_textbook_key() {
    let curve = curve_by_id(CurveId::Secp256k1);

    let pubkey = hex!(
        "0450863AD64A87AE8A2FE83C1AF1A8403CB53F53E486D8511DAD8A04887E5B2352"
        "2CD470243453A299FA9E77237716103ABC11A1DF38855ED6F2EE187E9C582BA6"
    );

    let public = PublicKey::from_sec1(&pubkey, &curve).unwrap();

    assert_eq!(
        address::p2pkh(&public, &curve, &Network::MAINNET, false),
        "16UwLL9Risc3QfPqBUvKofHmBQ7wMtjvM"
    );
}

#[test]
fn p2pkh_addresses_of_derived_key() {
    let curve = curve_by_id(CurveId::Secp256k1);
    let key = PrivateKey::from_hex(PRIV_HEX, &curve).unwrap();
    let public = PublicKey::derive(&key, &curve).unwrap();

    assert_eq!(
        address::p2pkh(&public, &curve, &Network::MAINNET, true),
        "1Dhtb2eZb3wq9kyUoY9oJPZXJrtPjUgDBU"
    );
    assert_eq!(
        address::p2pkh(&public, &curve, &Network::MAINNET, false),
        "157k4yFLw92XzCYysoS64hif6tcGdDULm6"
    );
}

#[test]
fn fingerprint_of_derived_key() {
    let curve = curve_by_id(CurveId::Secp256k1);
    let key = PrivateKey::from_hex(PRIV_HEX, &curve).unwrap();
    let public = PublicKey::derive(&key, &curve).unwrap();

    let fingerprint = address::fingerprint(&public, &curve);

    assert_eq!(fingerprint, "59BB614648F828A3D6AFD7E488E358CDE177DAA0");
    assert_eq!(fingerprint.len(), 40);

    // The fingerprint is the tail of the SHA-256 of the compressed key.
    let digest = sha256(&public.to_sec1_compressed(&curve));
    assert_eq!(fingerprint, hex::encode_upper(&digest[12..]));
}
