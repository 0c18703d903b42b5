mod common;

use common::{record, solid_sprite, tileset, ONE_ROW};
use lib_pgx::archive::{summarize, ArchiveReader, ReadError};

#[test]
fn test_record_byte_accounting() {
    let (count, width, height) = (3u8, 2u8, 4u8);
    let sprites = vec![vec![0x11; width as usize * height as usize * 5]; count as usize];
    let mut data = record(width, height, &sprites);
    data.extend_from_slice(&ONE_ROW);

    let mut reader = ArchiveReader::new(&data[..]);
    let header = reader.next_record().unwrap().unwrap();
    assert_eq!(header.sprite_bytes(), 40);
    let body = reader.read_sprites(&header).unwrap();

    assert_eq!(body.len(), 3 * 40);
    assert_eq!(reader.offset(), 3 + 3 * 2 * 4 * 5);
    assert_eq!(reader.sprites_read(), 3);

    // positioned on the next header
    let next = reader.next_record().unwrap().unwrap();
    assert_eq!(next.sprite_count, 1);
    reader.read_sprites(&next).unwrap();
    assert!(reader.next_record().unwrap().is_none());
    assert_eq!(reader.offset(), data.len() as u64);
}

#[test]
fn test_iterator_yields_records_in_order() {
    let mut data = tileset(2);
    data.extend(tileset(5));

    let records: Vec<_> = ArchiveReader::new(&data[..])
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].offset, 0);
    assert_eq!(records[0].first_sprite, 0);
    assert_eq!(records[1].offset, 3 + 2 * 160);
    assert_eq!(records[1].first_sprite, 2);
    assert_eq!(records[1].sprites().count(), 5);
    assert_eq!(records[1].sprite(4), Some(&solid_sprite(4)[..]));
}

#[test]
fn test_truncated_header() {
    for extra in [&[7u8][..], &[7, 1][..]] {
        let mut data = ONE_ROW.to_vec();
        data.extend_from_slice(extra);

        let result: Result<Vec<_>, _> = ArchiveReader::new(&data[..]).collect();
        match result {
            Err(ReadError::TruncatedHeader { offset, available }) => {
                assert_eq!(offset, ONE_ROW.len() as u64);
                assert_eq!(available, extra.len());
            }
            other => panic!("expected TruncatedHeader, got {:?}", other),
        }
    }
}

#[test]
fn test_truncated_sprite() {
    let mut data = tileset(3);
    data.pop();

    let result: Result<Vec<_>, _> = ArchiveReader::new(&data[..]).collect();
    match result {
        Err(ReadError::TruncatedSprite {
            offset,
            sprite_index,
            expected,
            available,
        }) => {
            assert_eq!(offset, 3 + 2 * 160);
            assert_eq!(sprite_index, 2);
            assert_eq!(expected, 160);
            assert_eq!(available, 159);
        }
        other => panic!("expected TruncatedSprite, got {:?}", other),
    }
}

#[test]
fn test_summarize_counts_without_decoding() {
    let mut data = tileset(4);
    data.extend(record(1, 1, &[]));
    data.extend(tileset(6));

    let summary = summarize(&data[..]).unwrap();
    assert_eq!(summary.tilesets(), 3);
    assert_eq!(summary.total_sprites, 10);
    assert_eq!(summary.total_bytes, data.len() as u64);
    assert_eq!(summary.headers[1].sprite_count, 0);
}

#[test]
fn test_summarize_truncated_sprite() {
    let mut data = tileset(2);
    data.truncate(data.len() - 1);

    assert!(matches!(
        summarize(&data[..]),
        Err(ReadError::TruncatedSprite {
            sprite_index: 1,
            ..
        })
    ));
}
