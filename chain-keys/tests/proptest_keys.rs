use proptest::prelude::*;

use chain_keys::base58::{check_decode, check_encode};
use chain_keys::{reverse_bytes, reversed, Chain, PrivateKey, PubKeyHashAddress, Wif};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn reverse_maps_index_to_mirror(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut buf = data.clone();
        let n = data.len();
        let out = reverse_bytes(&mut buf);
        prop_assert_eq!(out.len(), n);
        for i in 0..n {
            prop_assert_eq!(out[i], data[n - 1 - i]);
        }
    }

    #[test]
    fn reverse_is_an_involution(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut buf = data.clone();
        reverse_bytes(&mut buf);
        reverse_bytes(&mut buf);
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn reversed_agrees_with_in_place(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut buf = data.clone();
        reverse_bytes(&mut buf);
        prop_assert_eq!(reversed(&data), buf);
    }

    #[test]
    fn base58check_recovers_payload(data in prop::collection::vec(any::<u8>(), 0..80)) {
        prop_assert_eq!(check_decode(&check_encode(&data)).unwrap(), data);
    }

    #[test]
    fn wif_and_address_agree_for_every_chain(
        seed in prop::array::uniform32(1u8..=255u8),
        chain_idx in 0usize..Chain::ALL.len(),
        compress in any::<bool>(),
    ) {
        // Every byte is non-zero and the top byte stays below 0xff, so the
        // scalar is always in range.
        let mut bytes = seed;
        bytes[0] = bytes[0].min(0xfe);
        let chain = Chain::ALL[chain_idx];
        let params = chain.params();

        let key = PrivateKey::from_bytes(&bytes).unwrap();
        let wif = Wif::new(key.clone(), params, compress).unwrap();
        let decoded = Wif::decode(&wif.to_string()).unwrap();
        prop_assert!(decoded.is_for_network(params));
        prop_assert_eq!(decoded.private_key(), &key);
        prop_assert_eq!(decoded.compress_pub_key(), compress);

        let address = PubKeyHashAddress::from_pub_key(&wif.serialize_pub_key(), params).unwrap();
        let parsed = PubKeyHashAddress::decode(&address.to_string(), params).unwrap();
        prop_assert_eq!(parsed, address);
    }
}
