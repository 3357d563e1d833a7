/*!
# `GOTO <line number>`

## Purpose
Immediately and unconditionally move execution to the specified line number.

## Remarks
If `<line number>` isn't in the program a `LINE NUMBER ERROR` occurs
and the program stops. Not allowed in direct mode.

## Example
```text
10 GOTO 30
20 PRINT 1
30 PRINT 2
RUN
2
```

*/
